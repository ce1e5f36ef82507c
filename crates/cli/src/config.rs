//! Loading the method catalogue from TOML.
//!
//! Without `--methods` the embedded default catalogue is used.

use std::path::Path;

use touchcheck_core::{CatalogueConfig, MethodCatalogue};

use crate::error::CliError;

static DEFAULT_CATALOGUE: &str = include_str!("methods.toml");

pub(crate) fn load_catalogue(path: Option<&Path>) -> Result<MethodCatalogue, CliError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalogue(&text, &path.display().to_string())
        }
        None => parse_catalogue(DEFAULT_CATALOGUE, "<default>"),
    }
}

fn parse_catalogue(text: &str, name: &str) -> Result<MethodCatalogue, CliError> {
    let config: CatalogueConfig =
        toml::from_str(text).map_err(|source| CliError::CatalogueSyntax {
            name: name.to_owned(),
            source: Box::new(source),
        })?;
    let catalogue =
        MethodCatalogue::from_config(&config).map_err(|source| CliError::Catalogue {
            name: name.to_owned(),
            source,
        })?;
    tracing::info!(
        catalogue = name,
        methods = catalogue.len(),
        stage = %catalogue.stage(),
        "loaded method catalogue"
    );
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchcheck_core::RingingError;

    #[test]
    fn default_catalogue_loads() {
        let cat = load_catalogue(None).unwrap();
        assert_eq!(cat.len(), 14);
        assert_eq!(cat.stage().bells(), 8);
        let order: String = cat.methods().iter().map(|m| m.shorthand()).collect();
        assert_eq!(order, "CYSBEWLNVATDMG");
    }

    #[test]
    fn minimal_catalogue_uses_defaults() {
        let text = r#"
            [[methods]]
            shorthand = "N"
            name = "Double Norwich"
            place_notation = "-14-36-58-18,18"
        "#;
        let cat = parse_catalogue(text, "inline").unwrap();
        assert_eq!(cat.get('N').unwrap().lead_len(), 16);
        assert_eq!(cat.calls().bob, "14");
    }

    #[test]
    fn syntax_errors_name_the_file() {
        let err = parse_catalogue("methods = 3", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn catalogue_errors_are_wrapped() {
        let text = r#"
            stage = 6
            [[methods]]
            shorthand = "C"
            name = "Cambridge"
            place_notation = "-38-14-1258-36-14-58-16-78,12"
        "#;
        let err = parse_catalogue(text, "minor.toml").unwrap_err();
        assert!(matches!(
            err,
            CliError::Catalogue {
                source: RingingError::InvalidBellSymbol { .. },
                ..
            }
        ));
    }
}
