//! Persistencia consultiva del flag de respuesta. El engine no sabe dónde
//! viven los datos: escribe y lee a través de este trait, y el shell decide
//! si detrás hay el storage de eframe, localStorage o un mapa de test.

/// Clave bajo la que se guarda el último estado conocido de "contestada".
pub const ANSWERED_KEY: &str = "isAnswered";

/// Almacén clave→valor mínimo. Mismos nombres de método que el storage de
/// eframe para que el adaptador del shell sea una línea por método.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
}

/// Implementación en memoria para tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert!(store.get_string(ANSWERED_KEY).is_none());

        store.set_string(ANSWERED_KEY, "true".to_string());
        assert_eq!(store.get_string(ANSWERED_KEY).as_deref(), Some("true"));

        store.set_string(ANSWERED_KEY, "false".to_string());
        assert_eq!(store.get_string(ANSWERED_KEY).as_deref(), Some("false"));
    }
}
