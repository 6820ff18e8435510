use std::fmt::Display;

use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuOption {
    Exit,
    AddBook,
    AddMagazine,
    PrintBooks,
    PrintMagazines,
    DeleteBook,
    DeleteMagazine,
    AddUser,
    PrintUsers,
    FindPublication,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::Exit,
        MenuOption::AddBook,
        MenuOption::AddMagazine,
        MenuOption::PrintBooks,
        MenuOption::PrintMagazines,
        MenuOption::DeleteBook,
        MenuOption::DeleteMagazine,
        MenuOption::AddUser,
        MenuOption::PrintUsers,
        MenuOption::FindPublication,
    ];

    pub fn id(&self) -> usize {
        // Position in ALL
        *self as usize
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuOption::Exit => "exit",
            MenuOption::AddBook => "add a book",
            MenuOption::AddMagazine => "add a magazine",
            MenuOption::PrintBooks => "print books",
            MenuOption::PrintMagazines => "print magazines",
            MenuOption::DeleteBook => "delete a book",
            MenuOption::DeleteMagazine => "delete a magazine",
            MenuOption::AddUser => "add a user",
            MenuOption::PrintUsers => "print users",
            MenuOption::FindPublication => "find a publication by title",
        }
    }
}

impl TryFrom<usize> for MenuOption {
    type Error = ConsoleError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or_else(|| ConsoleError::NoSuchOption(value.to_string()))
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id(), self.description())
    }
}
