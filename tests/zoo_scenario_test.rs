use menagerie::utils::validation::Validate;
use menagerie::{
    Inflector, LocalStorage, Narrator, Role, SnapshotFormat, StateStore, ZooConfig, ZooError,
};
use tempfile::TempDir;

#[test]
fn test_builtin_roster_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let roster = ZooConfig::builtin().unwrap();
    let inflector = Inflector::new(roster.build_analyzer().unwrap());
    let narrator = Narrator::new(&inflector);

    let zoo = roster.build_zoo().unwrap();
    assert_eq!(
        narrator.sounds(&zoo.animals),
        vec!["Попугай чирикает.", "Лев рычит.", "Змея шипит."]
    );

    let duties: Vec<String> = roster
        .assignments(&zoo)
        .unwrap()
        .into_iter()
        .map(|(employee, animal)| narrator.duty(employee, animal))
        .collect();
    assert_eq!(duties, vec!["Алиса кормит Льва.", "Боб лечит Змею."]);

    let cleaner = zoo.employees_with_role(Role::Cleaner).next().unwrap();
    assert_eq!(
        narrator.clean_cages(cleaner, &zoo.animals),
        vec![
            "Константин чистит клетку для Попугая.",
            "Константин чистит клетку для Льва.",
            "Константин чистит клетку для Змеи.",
        ]
    );

    let store = StateStore::new(LocalStorage::new(temp_dir.path())).with_format(roster.state.format);
    store.save(&zoo, &roster.state.path).unwrap();
    let loaded = store.load(&roster.state.path).unwrap();

    assert_eq!(loaded, zoo);
    assert_eq!(
        narrator.staff_list(&loaded),
        vec![
            "Сотрудники зоопарка:",
            "Алиса, смотритель",
            "Боб, ветеринар",
            "Константин, уборщик",
        ]
    );
}

#[test]
fn test_roster_validation_reports_field() {
    let cases = [
        (
            r#"
[zoo]
name = "Зоопарк"

[[animals]]
name = "Лев"
age = -1
kind = "mammal"
fur_color = "золотой"
"#,
            "animals[0].age",
        ),
        (
            r#"
[zoo]
name = "Зоопарк"

[[animals]]
name = "Попугай"
age = 2
kind = "bird"
"#,
            "animals[0].wing_span",
        ),
        (
            r#"
[zoo]
name = "Зоопарк"

[[animals]]
name = "   "
age = 2
kind = "reptile"
scale_type = "гладкие"
"#,
            "animals[0].name",
        ),
        (
            r#"
[zoo]
name = "Зоопарк"

[[employees]]
name = "Алиса"
role = "keeper"

[[assignments]]
employee = "Алиса"
animal = "Единорог"
"#,
            "assignments[0].animal",
        ),
    ];

    for (content, expected_field) in cases {
        let roster = ZooConfig::from_toml_str(content).unwrap();
        let err = roster.validate().unwrap_err();
        let field = match &err {
            ZooError::InvalidConfigValueError { field, .. }
            | ZooError::ConfigValidationError { field, .. }
            | ZooError::MissingConfigError { field } => field.clone(),
            other => panic!("unexpected error: {}", other),
        };
        assert_eq!(field, expected_field);
        assert!(roster.build_zoo().is_err());
    }
}

#[test]
fn test_roster_with_json_state_and_guessing() {
    let temp_dir = TempDir::new().unwrap();
    let content = r#"
[zoo]
name = "Домашний зоопарк"

[inflector]
guess_unknown = true

[state]
path = "snapshots/home.json"
format = "json"

[[animals]]
name = "Барсик"
age = 7
kind = "mammal"
fur_color = "рыжий"

[[employees]]
name = "Ева"
role = "veterinarian"

[[assignments]]
employee = "Ева"
animal = "Барсик"
"#;

    let roster = ZooConfig::from_toml_str(content).unwrap();
    let inflector = Inflector::new(roster.build_analyzer().unwrap());
    let narrator = Narrator::new(&inflector);
    let zoo = roster.build_zoo().unwrap();

    let (employee, animal) = roster.assignments(&zoo).unwrap()[0];
    assert_eq!(narrator.duty(employee, animal), "Ева лечит Барсика.");

    let store = StateStore::new(LocalStorage::new(temp_dir.path())).with_format(roster.state.format);
    assert_eq!(store.format(), SnapshotFormat::Json);
    store.save(&zoo, &roster.state.path).unwrap();

    let raw = std::fs::read(temp_dir.path().join("snapshots/home.json")).unwrap();
    let text = String::from_utf8_lossy(&raw[6..]);
    assert!(text.contains("\"mammal\""));
    assert!(text.contains("рыжий"));

    assert_eq!(store.load(&roster.state.path).unwrap(), zoo);
}

#[test]
fn test_roster_from_missing_file_is_io_error() {
    let result = ZooConfig::from_file("/definitely/not/here/zoo.toml");
    assert!(matches!(result, Err(ZooError::IoError(_))));
}
