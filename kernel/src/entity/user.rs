mod name;
mod national_id;

pub use self::{name::*, national_id::*};
use destructure::Destructure;
use std::cmp::Ordering;
use std::fmt::Display;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct LibraryUser {
    first_name: UserFirstName,
    last_name: UserLastName,
    national_id: UserNationalId,
}

impl LibraryUser {
    pub fn new(
        first_name: UserFirstName,
        last_name: UserLastName,
        national_id: UserNationalId,
    ) -> Self {
        Self {
            first_name,
            last_name,
            national_id,
        }
    }

    /// Case-insensitive last name order, then first name, then national id.
    pub fn compare_by_last_name(a: &LibraryUser, b: &LibraryUser) -> Ordering {
        fn lower(value: &str) -> String {
            value.to_lowercase()
        }
        lower(a.last_name.as_ref().as_str())
            .cmp(&lower(b.last_name.as_ref().as_str()))
            .then_with(|| {
                lower(a.first_name.as_ref().as_str()).cmp(&lower(b.first_name.as_ref().as_str()))
            })
            .then_with(|| a.national_id.as_ref().cmp(b.national_id.as_ref()))
    }
}

impl Display for LibraryUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}; {}",
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.national_id.as_ref()
        )
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{LibraryUser, UserFirstName, UserLastName, UserNationalId};

    fn user(first: &str, last: &str, id: &str) -> LibraryUser {
        LibraryUser::new(
            UserFirstName::new(first),
            UserLastName::new(last),
            UserNationalId::new(id),
        )
    }

    #[test]
    fn last_name_order_ignores_case_and_breaks_ties() {
        let kowalski = user("Jan", "kowalski", "22222222222");
        let kowalska = user("Anna", "Kowalska", "33333333333");
        let anna = user("anna", "Kowalski", "11111111111");
        assert_eq!(
            LibraryUser::compare_by_last_name(&kowalska, &kowalski),
            Ordering::Less
        );
        assert_eq!(
            LibraryUser::compare_by_last_name(&anna, &kowalski),
            Ordering::Less
        );
        assert_eq!(
            LibraryUser::compare_by_last_name(&anna, &user("Anna", "KOWALSKI", "00000000000")),
            Ordering::Greater
        );
    }
}
