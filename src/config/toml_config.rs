use crate::core::morphology::DictionaryAnalyzer;
use crate::core::state_store::SnapshotFormat;
use crate::domain::model::{Animal, AnimalKind, Employee, Role, Zoo};
use crate::utils::error::{Result, ZooError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_ROSTER: &str = include_str!("../../assets/zoo.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZooConfig {
    pub zoo: ZooSection,
    #[serde(default)]
    pub inflector: InflectorConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub animals: Vec<AnimalConfig>,
    #[serde(default)]
    pub employees: Vec<EmployeeConfig>,
    #[serde(default)]
    pub assignments: Vec<AssignmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZooSection {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InflectorConfig {
    #[serde(default)]
    pub guess_unknown: bool,
    pub lexicon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: String,
    #[serde(default)]
    pub format: SnapshotFormat,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
            format: SnapshotFormat::default(),
        }
    }
}

fn default_state_path() -> String {
    "zoo_state.bin".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKindTag {
    Bird,
    Mammal,
    Reptile,
}

/// Flat roster entry; the attribute matching `kind` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalConfig {
    pub name: String,
    pub age: i64,
    pub kind: AnimalKindTag,
    pub wing_span: Option<f64>,
    pub fur_color: Option<String>,
    pub scale_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeConfig {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentConfig {
    pub employee: String,
    pub animal: String,
}

impl AnimalConfig {
    pub fn to_animal(&self, index: usize) -> Result<Animal> {
        let field = |name: &str| format!("animals[{}].{}", index, name);

        validation::validate_non_empty_string(&field("name"), &self.name)?;
        validation::validate_range(&field("age"), self.age, 0, u32::MAX as i64)?;

        let kind = match self.kind {
            AnimalKindTag::Bird => {
                let wing_span =
                    *validation::validate_required_field(&field("wing_span"), &self.wing_span)?;
                validation::validate_finite(&field("wing_span"), wing_span)?;
                validation::validate_range(&field("wing_span"), wing_span, 0.0, f64::MAX)?;
                AnimalKind::Bird { wing_span }
            }
            AnimalKindTag::Mammal => {
                let fur_color =
                    validation::validate_required_field(&field("fur_color"), &self.fur_color)?;
                validation::validate_non_empty_string(&field("fur_color"), fur_color)?;
                AnimalKind::Mammal {
                    fur_color: fur_color.clone(),
                }
            }
            AnimalKindTag::Reptile => {
                let scale_type =
                    validation::validate_required_field(&field("scale_type"), &self.scale_type)?;
                validation::validate_non_empty_string(&field("scale_type"), scale_type)?;
                AnimalKind::Reptile {
                    scale_type: scale_type.clone(),
                }
            }
        };

        Ok(Animal::new(self.name.trim(), self.age as u32, kind))
    }
}

impl ZooConfig {
    /// Loads a roster from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZooError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// The roster bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ZooError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZooError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("zoo.name", &self.zoo.name)?;
        validation::validate_path("state.path", &self.state.path)?;

        if let Some(lexicon) = &self.inflector.lexicon {
            validation::validate_path("inflector.lexicon", lexicon)?;
            validation::validate_file_extension("inflector.lexicon", lexicon, &["toml"])?;
        }

        for (i, animal) in self.animals.iter().enumerate() {
            animal.to_animal(i)?;
        }

        for (i, employee) in self.employees.iter().enumerate() {
            validation::validate_non_empty_string(&format!("employees[{}].name", i), &employee.name)?;
        }

        for (i, assignment) in self.assignments.iter().enumerate() {
            let employee = assignment.employee.trim();
            if !self.employees.iter().any(|e| e.name.trim() == employee) {
                return Err(ZooError::ConfigValidationError {
                    field: format!("assignments[{}].employee", i),
                    message: format!("no employee named '{}'", assignment.employee),
                });
            }
            let animal = assignment.animal.trim();
            if !self.animals.iter().any(|a| a.name.trim() == animal) {
                return Err(ZooError::ConfigValidationError {
                    field: format!("assignments[{}].animal", i),
                    message: format!("no animal named '{}'", assignment.animal),
                });
            }
        }

        Ok(())
    }

    /// Validates the roster and builds the zoo, keeping roster order.
    pub fn build_zoo(&self) -> Result<Zoo> {
        self.validate_config()?;

        let mut zoo = Zoo::new(self.zoo.name.trim());
        for (i, animal) in self.animals.iter().enumerate() {
            zoo.add_animal(animal.to_animal(i)?);
        }
        for employee in &self.employees {
            zoo.add_employee(Employee::new(employee.name.trim(), employee.role));
        }
        Ok(zoo)
    }

    /// Resolves `[[assignments]]` against a zoo built from this roster.
    pub fn assignments<'z>(&self, zoo: &'z Zoo) -> Result<Vec<(&'z Employee, &'z Animal)>> {
        self.assignments
            .iter()
            .enumerate()
            .map(|(i, assignment)| {
                let employee = zoo.find_employee(assignment.employee.trim()).ok_or_else(|| {
                    ZooError::ConfigValidationError {
                        field: format!("assignments[{}].employee", i),
                        message: format!("no employee named '{}'", assignment.employee),
                    }
                })?;
                let animal = zoo.find_animal(assignment.animal.trim()).ok_or_else(|| {
                    ZooError::ConfigValidationError {
                        field: format!("assignments[{}].animal", i),
                        message: format!("no animal named '{}'", assignment.animal),
                    }
                })?;
                Ok((employee, animal))
            })
            .collect()
    }

    /// The built-in lexicon plus `[inflector].lexicon`, with guessing as configured.
    pub fn build_analyzer(&self) -> Result<DictionaryAnalyzer> {
        let mut analyzer = DictionaryAnalyzer::builtin()?;
        if let Some(lexicon) = &self.inflector.lexicon {
            analyzer = analyzer.with_lexicon_file(lexicon)?;
        }
        Ok(analyzer.with_guessing(self.inflector.guess_unknown))
    }
}

impl Validate for ZooConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
