//! Probe of the optional boundary-geometry file.
//!
//! The map view needs a GeoJSON file whose features carry a department-name
//! property the renderer can match `by_department` labels against. The core
//! does no geometric matching; it only checks that the file is usable and
//! which property holds the name, and produces the human-readable
//! diagnostic the presentation layer shows when it is not.

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Default file name of the boundary geometry inside the data directory
pub const FILE_NAME: &str = "colombia_departamentos.geojson";

/// Feature properties probed for the department name, in preference order
const NAME_PROPERTY_CANDIDATES: &[&str] = &[
    "NOMBRE_DPT",
    "NOMBRE",
    "NOMBRE_DEPART",
    "DEPARTAMEN",
    "departamento",
    "name",
];

/// Outcome of probing the boundary-geometry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryStatus {
    /// The file parsed and a name property was detected
    Available {
        /// Property of each feature holding the department name
        name_property: String,
        /// Number of features in the collection
        features: usize,
    },
    /// The file does not exist
    Missing {
        /// Diagnostic shown alongside the fallback visualization
        message: String,
    },
    /// The file exists but cannot be used
    Unusable {
        /// Diagnostic shown alongside the fallback visualization
        message: String,
    },
}

impl GeometryStatus {
    /// The diagnostic to surface, if the geometry is unusable
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Available { .. } => None,
            Self::Missing { message } | Self::Unusable { message } => Some(message),
        }
    }

    /// Whether the map view can be rendered
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Find the property holding the department name in the first feature
fn detect_name_property(features: &[Value]) -> Option<String> {
    let properties = features.first()?.get("properties")?.as_object()?;
    for &candidate in NAME_PROPERTY_CANDIDATES {
        if properties.contains_key(candidate) {
            return Some(candidate.to_string());
        }
    }
    // no known name: settle for the first string-valued property
    properties
        .iter()
        .find(|(_, v)| v.is_string())
        .map(|(k, _)| k.clone())
}

/// Probe the boundary-geometry file
///
/// Never fails: absence and malformation both collapse into a status whose
/// diagnostic tells the user what to fix.
#[must_use]
pub fn probe(path: &Path) -> GeometryStatus {
    if !path.exists() {
        return GeometryStatus::Missing {
            message: format!(
                "No se encontró '{}'. Añádelo para ver el mapa coroplético. \
                 Se muestra gráfico de barras como alternativa.",
                path.display()
            ),
        };
    }

    let geojson: Value = match fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(value) => value,
        Err(e) => {
            log::warn!("could not read GeoJSON {}: {e}", path.display());
            return GeometryStatus::Unusable {
                message: format!(
                    "Error leyendo GeoJSON: {e}. Se muestra gráfico de barras como alternativa."
                ),
            };
        }
    };

    let features = geojson
        .get("features")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    match detect_name_property(&features) {
        Some(name_property) => {
            log::info!(
                "geometry {}: {} features, name property '{name_property}'",
                path.display(),
                features.len()
            );
            GeometryStatus::Available {
                name_property,
                features: features.len(),
            }
        }
        None => GeometryStatus::Unusable {
            message: "GeoJSON presente pero no se detectó propiedad de nombre. \
                      Se muestra gráfico de barras como alternativa."
                .to_string(),
        },
    }
}
