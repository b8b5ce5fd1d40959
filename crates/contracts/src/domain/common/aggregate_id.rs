use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + Display + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}
