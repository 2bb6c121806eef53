use crate::core::inflector::Inflector;
use crate::core::morphology::Case;
use crate::domain::model::{Animal, Employee, Role, Zoo};
use crate::domain::ports::MorphAnalyzer;

/// Renders the zoo's story as display lines, inflecting animal names as needed.
pub struct Narrator<'a, A: MorphAnalyzer> {
    inflector: &'a Inflector<A>,
}

impl<'a, A: MorphAnalyzer> Narrator<'a, A> {
    pub fn new(inflector: &'a Inflector<A>) -> Self {
        Self { inflector }
    }

    pub fn sounds(&self, animals: &[Animal]) -> Vec<String> {
        animals.iter().map(Animal::make_sound).collect()
    }

    pub fn animal_added(&self, zoo: &Zoo, animal: &Animal) -> String {
        format!("Добавлен {} в зоопарк {}.", animal.name, zoo.name)
    }

    pub fn employee_added(&self, zoo: &Zoo, employee: &Employee) -> String {
        format!("Добавлен сотрудник {} в зоопарк {}.", employee.name, zoo.name)
    }

    /// The employee's role-specific action on one animal.
    pub fn duty(&self, employee: &Employee, animal: &Animal) -> String {
        match employee.role {
            Role::Keeper => format!(
                "{} кормит {}.",
                employee.name,
                self.inflector.inflect(&animal.name, Case::Accusative)
            ),
            Role::Veterinarian => format!(
                "{} лечит {}.",
                employee.name,
                self.inflector.inflect(&animal.name, Case::Accusative)
            ),
            Role::Cleaner => format!(
                "{} чистит клетку {}.",
                employee.name,
                self.inflector.inflect(&animal.name, Case::Genitive)
            ),
        }
    }

    pub fn clean_cages(&self, employee: &Employee, animals: &[Animal]) -> Vec<String> {
        animals
            .iter()
            .map(|animal| {
                format!(
                    "{} чистит клетку для {}.",
                    employee.name,
                    self.inflector.inflect(&animal.name, Case::Genitive)
                )
            })
            .collect()
    }

    pub fn animal_list(&self, zoo: &Zoo) -> Vec<String> {
        std::iter::once("Список животных в зоопарке:".to_string())
            .chain(zoo.animals.iter().map(Animal::to_string))
            .collect()
    }

    pub fn staff_list(&self, zoo: &Zoo) -> Vec<String> {
        std::iter::once("Сотрудники зоопарка:".to_string())
            .chain(
                zoo.employees
                    .iter()
                    .map(|e| format!("{}, {}", e.name, e.role.title())),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::morphology::DictionaryAnalyzer;

    fn inflector() -> Inflector<DictionaryAnalyzer> {
        Inflector::new(DictionaryAnalyzer::builtin().unwrap())
    }

    #[test]
    fn test_duties_inflect_animal_names() {
        let inflector = inflector();
        let narrator = Narrator::new(&inflector);
        let lion = Animal::mammal("Лев", 5, "золотой");
        let snake = Animal::reptile("Змея", 3, "гладкие");

        assert_eq!(narrator.duty(&Employee::keeper("Алиса"), &lion), "Алиса кормит Льва.");
        assert_eq!(
            narrator.duty(&Employee::veterinarian("Боб"), &snake),
            "Боб лечит Змею."
        );
        assert_eq!(
            narrator.duty(&Employee::cleaner("Константин"), &snake),
            "Константин чистит клетку Змеи."
        );
    }

    #[test]
    fn test_clean_cages_covers_every_animal_in_order() {
        let inflector = inflector();
        let narrator = Narrator::new(&inflector);
        let animals = vec![
            Animal::bird("Попугай", 2, 0.5),
            Animal::mammal("Лев", 5, "золотой"),
        ];

        let lines = narrator.clean_cages(&Employee::cleaner("Константин"), &animals);
        assert_eq!(
            lines,
            vec![
                "Константин чистит клетку для Попугая.",
                "Константин чистит клетку для Льва.",
            ]
        );
    }

    #[test]
    fn test_animal_list() {
        let inflector = inflector();
        let narrator = Narrator::new(&inflector);
        let mut zoo = Zoo::new("Городской зоопарк");
        zoo.add_animal(Animal::mammal("Лев", 5, "золотой"));

        assert_eq!(
            narrator.animal_list(&zoo),
            vec!["Список животных в зоопарке:", "Имя: Лев, Возраст: 5"]
        );
        assert_eq!(
            narrator.animal_added(&zoo, &zoo.animals[0]),
            "Добавлен Лев в зоопарк Городской зоопарк."
        );
    }
}
