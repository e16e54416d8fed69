// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use crate::config::settings::OverrideSettings;
use crate::domain::models::country::Field;

/// 内置地图修正：来源文章使用了不规范的文件名
const MAP_OVERRIDES: &[(&str, &str)] = &[
    ("Czech_Republic", "EU-Czech_Republic.svg"),
    ("Myanmar", "Myanmar_on_the_globe_(Myanmar_centered).svg"),
    ("North_Macedonia", "Europe-Republic_of_North_Macedonia.svg"),
    ("Eritrea", "Eritrea_(Africa_orthographic_projection).svg"),
    ("Iceland", "Iceland_(orthographic_projection).svg"),
];

/// 内置国旗修正
const FLAG_OVERRIDES: &[(&str, &str)] = &[
    (
        "Federated_States_of_Micronesia",
        "Flag_of_the_Federated_States_of_Micronesia.svg",
    ),
    ("Honduras", "Flag_of_Honduras.svg"),
    ("Seychelles", "Flag_of_Seychelles.svg"),
];

/// 内置首都修正：多首都或信息框格式无法直接解析的国家
const CAPITAL_OVERRIDES: &[(&str, &str)] = &[
    (
        "Bolivia",
        "Sucre *(constitutional and judicial)* and La Paz *(executive and legislative)*",
    ),
    ("Azerbaijan", "Baku"),
    (
        "Equatorial_Guinea",
        "Malabo *(current) and Ciudad de la Paz *(under construction)*",
    ),
    ("Eswatini", "Mbabane *(executive)* and Lobamba *(legislative)*"),
    ("Ivory_Coast", "Yamoussoukro *(de jure)* and Abidjan *(de facto)*"),
    ("Malaysia", "Kuala Lumpur and Putrajaya *(administrative)*"),
    (
        "South_Africa",
        "Pretoria *(executive)*, Cape Town *(legislative)* and Bloemfontein *(judicial)*",
    ),
    (
        "Sri_Lanka",
        "Sri Jayawardenepura Kotte *(legislative)* and Colombo *(executive and judicial)*",
    ),
    ("Switzerland", "None *(de jure)* and Bern *(de facto)*"),
    ("Yemen", "Sana'a *(de jure)* and Aden *(Temporary capital)*"),
    ("United_States", "Washington, D.C."),
];

// Environment-sourced config keys arrive lowercased, so keys are folded on
// both insert and lookup.
fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (fold_key(k), v.to_string()))
        .collect()
}

fn merge(table: &mut HashMap<String, String>, extra: &HashMap<String, String>) {
    table.extend(extra.iter().map(|(k, v)| (fold_key(k), v.clone())));
}

/// 人工修正表
///
/// 规范化文章键 → 字段字面值，在任何模式匹配之前按键查找（不区分大小写）
#[derive(Debug, Clone, Default)]
pub struct OverrideTables {
    map: HashMap<String, String>,
    flag: HashMap<String, String>,
    capital: HashMap<String, String>,
}

impl OverrideTables {
    /// 空表
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内置修正表
    pub fn builtin() -> Self {
        Self {
            map: to_map(MAP_OVERRIDES),
            flag: to_map(FLAG_OVERRIDES),
            capital: to_map(CAPITAL_OVERRIDES),
        }
    }

    /// 内置表叠加配置中的条目，键冲突时配置优先
    pub fn from_settings(settings: &OverrideSettings) -> Self {
        let mut tables = Self::builtin();
        merge(&mut tables.map, &settings.map);
        merge(&mut tables.flag, &settings.flag);
        merge(&mut tables.capital, &settings.capital);
        tables
    }

    /// 添加或替换一个条目
    pub fn insert(&mut self, field: Field, key: impl Into<String>, value: impl Into<String>) {
        let key = fold_key(&key.into());
        self.table_mut(field).insert(key, value.into());
    }

    /// 查找字段修正值
    pub fn get(&self, field: Field, key: &str) -> Option<&str> {
        self.table(field).get(&fold_key(key)).map(String::as_str)
    }

    fn table(&self, field: Field) -> &HashMap<String, String> {
        match field {
            Field::ImageMap => &self.map,
            Field::ImageFlag => &self.flag,
            Field::Capital => &self.capital,
        }
    }

    fn table_mut(&mut self, field: Field) -> &mut HashMap<String, String> {
        match field {
            Field::ImageMap => &mut self.map,
            Field::ImageFlag => &mut self.flag,
            Field::Capital => &mut self.capital,
        }
    }
}
