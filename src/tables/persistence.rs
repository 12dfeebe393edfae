use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::tables::PriceTables;

/// Load price tables from a JSON file.
///
/// Tags are lowercased to match request tags. Rejects tables that leave a side dish or supply unpriced.
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<PriceTables> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tables: PriceTables = serde_json::from_str::<PriceTables>(&content)?.normalized();
    tables.check_complete()?;

    log::info!(
        "Loaded price tables from {} ({} meats)",
        path.display(),
        tables.meats.len()
    );
    Ok(tables)
}

/// Save price tables to a JSON file.
pub fn save_tables<P: AsRef<Path>>(path: P, tables: &PriceTables) -> Result<()> {
    let json = serde_json::to_string_pretty(tables)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChurrascoError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let mut tables = PriceTables::default();
        tables.meats.insert("cordeiro".to_string(), 95.0);

        let file = NamedTempFile::new().unwrap();
        save_tables(file.path(), &tables).unwrap();

        let reloaded = load_tables(file.path()).unwrap();
        assert_eq!(reloaded, tables);
        assert_eq!(reloaded.meat_price("cordeiro"), 95.0);
    }

    #[test]
    fn test_load_matches_mixed_case_meat_tags() {
        let mut tables = PriceTables::default();
        tables.meats.insert("Cordeiro".to_string(), 95.0);
        tables.prep_minutes.insert("Cordeiro".to_string(), 90);

        let file = NamedTempFile::new().unwrap();
        save_tables(file.path(), &tables).unwrap();

        let loaded = load_tables(file.path()).unwrap();
        assert_eq!(loaded.meat_price("cordeiro"), 95.0);
        assert_eq!(loaded.prep_minutes_for("cordeiro"), 90);
    }

    #[test]
    fn test_load_rejects_missing_side_price() {
        let json = r#"{
            "carnes": {"picanha": 80},
            "acompanhamentos": {"arroz": 8, "farofa": 10, "vinagrete": 5},
            "bebidas": {"cerveja": 3, "refrigerante": 5, "agua": 2, "carvao": 5},
            "tempos_preparo": {"picanha": 40}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_tables(file.path()).unwrap_err();
        assert!(matches!(err, ChurrascoError::MissingPrice(ref tag) if tag == "pao_alho"));
    }
}
