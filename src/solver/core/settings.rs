use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside its set of legal options
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for a [`Triangulator`](crate::solver::Triangulator).
///
/// Construct with [`TriangulationSettingsBuilder`], which validates the
/// string-valued fields on `build()`.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TriangulationSettings {
    ///lookahead depth of the greedy search.  0 and 1 both mean one step
    #[builder(default = "1")]
    pub depth: usize,

    ///cost heuristic: "fill", "width" or "weight"
    #[builder(default = r#""fill".to_string()"#)]
    pub heuristic: String,

    ///evaluate candidate costs in parallel (requires the `parallel` feature)
    #[builder(default = "true")]
    pub parallel: bool,

    ///report run summaries at info rather than debug level
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for TriangulationSettings {
    fn default() -> TriangulationSettings {
        TriangulationSettings {
            depth: 1,
            heuristic: "fill".to_string(),
            parallel: true,
            verbose: false,
        }
    }
}

impl TriangulationSettings {
    /// Checks that the settings are valid.  This only ensures that fields
    /// specified by strings contain valid options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_heuristic(&self.heuristic)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for TriangulationSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        TriangulationSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl TriangulationSettingsBuilder {
    /// check that the specified heuristic is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref heuristic) = self.heuristic {
            validate_heuristic(heuristic)?;
        }
        Ok(())
    }
}

fn validate_heuristic(heuristic: &str) -> Result<(), SettingsError> {
    match heuristic {
        "fill" | "width" | "weight" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("heuristic")),
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = TriangulationSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, TriangulationSettings::default());

    // fail on unknown heuristic
    assert!(TriangulationSettingsBuilder::default()
        .heuristic("bogus".to_string())
        .build()
        .is_err());

    // weight is a legal tag, even though it needs a scorer later
    assert!(TriangulationSettingsBuilder::default()
        .heuristic("weight".to_string())
        .depth(3)
        .build()
        .is_ok());

    // directly construct bad settings and manually check
    let settings = TriangulationSettings {
        heuristic: "Fill".to_string(),
        ..TriangulationSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("heuristic"))
    );
}
