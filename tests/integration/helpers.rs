// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wikicards::config::settings::{
    HttpSettings, OutputSettings, OverrideSettings, RateLimitingSettings, ResolverSettings,
    Settings, StorageSettings, WikiSettings,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEED: &str = "Member_states_of_the_United_Nations";

pub const SEED_TEXT: &str = "{| class=\"wikitable\"
|-
| {{Flagicon|Chad}} [[Chad]]
|-
| {{Flagicon|Bahamas}} [[The Bahamas|Bahamas]]
|}
";

pub const CHAD_TEXT: &str = "{{Infobox country
| image_flag       = Flag of Chad.svg
| image_map        = Chad (orthographic projection).svg
| capital          = [[N'Djamena]]
}}
";

pub const BAHAMAS_TEXT: &str = "{{Infobox country
| image_flag = Flag of the Bahamas.svg
| image_map2 = The Bahamas on the globe (Americas centered).svg
| capital = [[Nassau, Bahamas|Nassau]]
}}
";

pub const CHAD_MAP: &str = "/commons/4/46/Chad_(orthographic_projection).svg";
pub const CHAD_FLAG: &str = "/commons/4/4b/Flag_of_Chad.svg";
pub const BAHAMAS_MAP: &str = "/commons/d/de/The_Bahamas_on_the_globe_(Americas_centered).svg";
pub const BAHAMAS_FLAG: &str = "/commons/9/93/Flag_of_the_Bahamas.svg";

/// 测试环境：模拟维基服务器 + 临时工作目录
pub struct TestWiki {
    pub server: MockServer,
    pub dir: TempDir,
    pub settings: Settings,
}

impl TestWiki {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&server.uri(), dir.path());
        Self {
            server,
            dir,
            settings,
        }
    }

    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.settings.output.root_dir)
    }

    pub async fn requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }

    pub async fn mount_page(&self, key: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(format!("/wiki/Special:Export/{key}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_media(&self, media_path: &str) {
        Mock::given(method("GET"))
            .and(path(media_path))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<svg/>".to_vec()))
            .mount(&self.server)
            .await;
    }

    /// 种子文章、Chad、The Bahamas 及其重定向，以及全部媒体文件
    pub async fn mount_world(&self) {
        self.mount_page(SEED, export_page(SEED, None, SEED_TEXT))
            .await;
        self.mount_page("Chad", export_page("Chad", None, CHAD_TEXT))
            .await;
        self.mount_page(
            "The_Bahamas",
            export_page("The Bahamas", None, BAHAMAS_TEXT),
        )
        .await;
        self.mount_page(
            "Bahamas",
            export_page("Bahamas", Some("The Bahamas"), "#REDIRECT [[The Bahamas]]"),
        )
        .await;
        for media in [CHAD_MAP, CHAD_FLAG, BAHAMAS_MAP, BAHAMAS_FLAG] {
            self.mount_media(media).await;
        }
    }

    /// 预先写好的位置卡片，提供答案片段
    pub fn write_location(&self, key: &str, answer: &str) {
        let root = self.root();
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(
            root.join(format!("{key}_location.md")),
            format!("Where in the world is **{key}**?\n<!--question-->\n{answer}\n"),
        )
        .unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).unwrap()
    }
}

pub fn export_page(title: &str, redirect: Option<&str>, text: &str) -> String {
    let redirect = redirect
        .map(|target| format!("<redirect title=\"{target}\" />"))
        .unwrap_or_default();
    format!(
        "<mediawiki xml:lang=\"en\"><siteinfo><sitename>Wikipedia</sitename></siteinfo>\
         <page><title>{title}</title><ns>0</ns>{redirect}\
         <revision><id>1</id><text bytes=\"{}\" xml:space=\"preserve\">{text}</text></revision>\
         </page></mediawiki>",
        text.len()
    )
}

pub fn settings_for(base: &str, dir: &Path) -> Settings {
    let path = |name: &str| dir.join(name).to_string_lossy().into_owned();
    Settings {
        wiki: WikiSettings {
            export_base_url: format!("{base}/wiki/Special:Export/"),
            upload_base_url: format!("{base}/commons/"),
            seed_article: SEED.to_string(),
        },
        http: HttpSettings {
            user_agent: "wikicards-test/0.1".to_string(),
            timeout_secs: 10,
        },
        rate_limiting: RateLimitingSettings {
            enabled: false,
            capacity: 2,
            interval_ms: 1000,
        },
        resolver: ResolverSettings { max_redirects: 16 },
        storage: StorageSettings {
            pages_dir: path("pages"),
            files_dir: path("files"),
        },
        output: OutputSettings {
            root_dir: path("countries"),
            country_list_path: path("countries.txt"),
        },
        overrides: OverrideSettings::default(),
    }
}
