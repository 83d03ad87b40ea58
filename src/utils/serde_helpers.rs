//! Helpers de deserialización
//!
//! `double_option` permite que un campo `Option<Option<T>>` de un patch
//! distinga entre campo ausente (None, sin cambios) y null explícito
//! (Some(None), borrar el valor). Sin este helper serde colapsa el null
//! en el Option exterior.

use serde::{Deserialize, Deserializer};

pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
