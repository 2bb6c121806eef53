use clap::Parser;
use menagerie::utils::{logger, validation::Validate};
use menagerie::{
    CliConfig, Inflector, LocalStorage, Narrator, Role, StateStore, Zoo, ZooConfig, ZooError,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting menagerie");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(loaded) => {
            tracing::info!(
                "✅ Zoo restored: {} animals, {} employees",
                loaded.animals.len(),
                loaded.employees.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<Zoo, ZooError> {
    let mut roster = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path);
            ZooConfig::from_file(path)?
        }
        None => ZooConfig::builtin()?,
    };

    if let Some(lexicon) = &config.lexicon {
        roster.inflector.lexicon = Some(lexicon.clone());
    }
    if config.guess {
        roster.inflector.guess_unknown = true;
    }
    if let Some(state) = &config.state {
        roster.state.path = state.clone();
    }
    if let Some(format) = config.format {
        roster.state.format = format;
    }
    roster.validate()?;

    let analyzer = roster.build_analyzer()?;
    tracing::debug!(
        "Lexicon ready: {} lexemes, guessing {}",
        analyzer.len(),
        if analyzer.guesses_unknown() { "on" } else { "off" }
    );
    let inflector = Inflector::new(analyzer);
    let narrator = Narrator::new(&inflector);

    let zoo = roster.build_zoo()?;

    for line in narrator.sounds(&zoo.animals) {
        println!("{}", line);
    }
    for animal in &zoo.animals {
        println!("{}", narrator.animal_added(&zoo, animal));
    }
    for employee in &zoo.employees {
        println!("{}", narrator.employee_added(&zoo, employee));
    }

    for (employee, animal) in roster.assignments(&zoo)? {
        println!("{}", narrator.duty(employee, animal));
    }
    for cleaner in zoo.employees_with_role(Role::Cleaner) {
        for line in narrator.clean_cages(cleaner, &zoo.animals) {
            println!("{}", line);
        }
    }

    for line in narrator.animal_list(&zoo) {
        println!("{}", line);
    }

    let store = StateStore::new(LocalStorage::current_dir()).with_format(roster.state.format);
    store.save(&zoo, &roster.state.path)?;
    println!("Состояние зоопарка сохранено в файл.");

    let loaded = store.load(&roster.state.path)?;
    println!("Состояние зоопарка загружено из файла.");

    for line in narrator.animal_list(&loaded) {
        println!("{}", line);
    }
    for line in narrator.staff_list(&loaded) {
        println!("{}", line);
    }

    Ok(loaded)
}
