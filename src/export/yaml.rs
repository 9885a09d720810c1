//! YAML Export functionality
//!
//! Writes the full export as YAML for reading by humans.

use std::io::Write;

use crate::error::{TravelError, TravelResult};
use crate::export::json::TravelExport;

/// Write an export as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &TravelExport, mut writer: W) -> TravelResult<()> {
    let export_err = |e: std::io::Error| TravelError::Export(e.to_string());

    writeln!(writer, "# Wayfarer travel export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| TravelError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TravelResult<TravelExport> {
    let export: TravelExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(TravelError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::ExpenseSection;
    use crate::models::ExpenseRecord;

    #[test]
    fn test_yaml_export() {
        let expenses = vec![ExpenseRecord::new("Iceland", "Hotel", "$450")];
        let export = TravelExport::new(None, Some(ExpenseSection::build(&expenses)));

        let mut output = Vec::new();
        export_yaml(&export, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Wayfarer travel export"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("1.0.0"));
        assert!(yaml.contains("trip_name: Iceland"));

        let imported = import_from_yaml(&yaml).unwrap();
        assert_eq!(imported.expenses.unwrap().trips.len(), 1);
    }
}
