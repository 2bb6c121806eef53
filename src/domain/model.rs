use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant payload of an [`Animal`]. Serialized externally tagged so that
/// both the binary and the JSON snapshot keep the variant name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    Bird { wing_span: f64 },
    Mammal { fur_color: String },
    Reptile { scale_type: String },
}

impl AnimalKind {
    pub fn sound(&self) -> &'static str {
        match self {
            AnimalKind::Bird { .. } => "чирикает",
            AnimalKind::Mammal { .. } => "рычит",
            AnimalKind::Reptile { .. } => "шипит",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            AnimalKind::Bird { .. } => "bird",
            AnimalKind::Mammal { .. } => "mammal",
            AnimalKind::Reptile { .. } => "reptile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub age: u32,
    pub kind: AnimalKind,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32, kind: AnimalKind) -> Self {
        Self {
            name: name.into(),
            age,
            kind,
        }
    }

    pub fn bird(name: impl Into<String>, age: u32, wing_span: f64) -> Self {
        Self::new(name, age, AnimalKind::Bird { wing_span })
    }

    pub fn mammal(name: impl Into<String>, age: u32, fur_color: impl Into<String>) -> Self {
        Self::new(
            name,
            age,
            AnimalKind::Mammal {
                fur_color: fur_color.into(),
            },
        )
    }

    pub fn reptile(name: impl Into<String>, age: u32, scale_type: impl Into<String>) -> Self {
        Self::new(
            name,
            age,
            AnimalKind::Reptile {
                scale_type: scale_type.into(),
            },
        )
    }

    pub fn make_sound(&self) -> String {
        format!("{} {}.", self.name, self.kind.sound())
    }

    pub fn eat(&self) -> String {
        format!("{} ест.", self.name)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Имя: {}, Возраст: {}", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Keeper,
    Veterinarian,
    Cleaner,
}

impl Role {
    pub fn title(&self) -> &'static str {
        match self {
            Role::Keeper => "смотритель",
            Role::Veterinarian => "ветеринар",
            Role::Cleaner => "уборщик",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn keeper(name: impl Into<String>) -> Self {
        Self::new(name, Role::Keeper)
    }

    pub fn veterinarian(name: impl Into<String>) -> Self {
        Self::new(name, Role::Veterinarian)
    }

    pub fn cleaner(name: impl Into<String>) -> Self {
        Self::new(name, Role::Cleaner)
    }
}

/// The aggregate root and the unit of persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zoo {
    pub name: String,
    pub animals: Vec<Animal>,
    pub employees: Vec<Employee>,
}

impl Zoo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animals: Vec::new(),
            employees: Vec::new(),
        }
    }

    pub fn add_animal(&mut self, animal: Animal) {
        tracing::debug!("Adding {} ({}) to {}", animal.name, animal.kind.tag(), self.name);
        self.animals.push(animal);
    }

    pub fn add_employee(&mut self, employee: Employee) {
        tracing::debug!("Hiring {} as {:?} at {}", employee.name, employee.role, self.name);
        self.employees.push(employee);
    }

    pub fn find_animal(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.name == name)
    }

    pub fn find_employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn employees_with_role(&self, role: Role) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(move |e| e.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_sound_dispatches_on_kind() {
        assert_eq!(Animal::bird("Попугай", 2, 0.5).make_sound(), "Попугай чирикает.");
        assert_eq!(Animal::mammal("Лев", 5, "золотой").make_sound(), "Лев рычит.");
        assert_eq!(Animal::reptile("Змея", 3, "гладкие").make_sound(), "Змея шипит.");
    }

    #[test]
    fn test_animal_display() {
        let lion = Animal::mammal("Лев", 5, "золотой");
        assert_eq!(lion.to_string(), "Имя: Лев, Возраст: 5");
        assert_eq!(lion.eat(), "Лев ест.");
    }

    #[test]
    fn test_zoo_keeps_insertion_order_and_duplicates() {
        let mut zoo = Zoo::new("Городской зоопарк");
        zoo.add_animal(Animal::mammal("Лев", 5, "золотой"));
        zoo.add_animal(Animal::bird("Попугай", 2, 0.5));
        zoo.add_animal(Animal::mammal("Лев", 5, "золотой"));
        zoo.add_employee(Employee::cleaner("Константин"));
        zoo.add_employee(Employee::keeper("Алиса"));

        let names: Vec<&str> = zoo.animals.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Лев", "Попугай", "Лев"]);
        assert_eq!(zoo.employees_with_role(Role::Keeper).count(), 1);
        assert_eq!(zoo.find_employee("Алиса").map(|e| e.role), Some(Role::Keeper));
        assert!(zoo.find_animal("Змея").is_none());
    }
}
