use kernel::prelude::entity::LibraryUser;
use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::{CreateUserDto, UserDto};

pub trait UserService: DependOnLibrary {
    fn add_user(&mut self, dto: CreateUserDto) -> error_stack::Result<(), KernelError> {
        let user = LibraryUser::from(dto);
        tracing::info!("Adding user {}", user);
        self.library_mut().add_user(user)
    }

    fn get_users(&self) -> Vec<UserDto> {
        self.library()
            .sorted_users(LibraryUser::compare_by_last_name)
            .into_iter()
            .cloned()
            .map(UserDto::from)
            .collect()
    }
}

impl<T> UserService for T where T: DependOnLibrary {}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::Library;
    use kernel::KernelError;

    use crate::service::{DependOnLibrary, UserService};
    use crate::transfer::CreateUserDto;

    #[derive(Default)]
    struct Session(Library);

    impl DependOnLibrary for Session {
        fn library(&self) -> &Library {
            &self.0
        }

        fn library_mut(&mut self) -> &mut Library {
            &mut self.0
        }
    }

    fn create_user(first_name: &str, last_name: &str, national_id: &str) -> CreateUserDto {
        CreateUserDto {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            national_id: national_id.to_string(),
        }
    }

    #[test]
    fn users_sorted_by_last_name() -> error_stack::Result<(), KernelError> {
        let mut library = Session::default();
        library.add_user(create_user("Jan", "zielinski", "33333333333"))?;
        library.add_user(create_user("Anna", "Kowalska", "11111111111"))?;
        library.add_user(create_user("Piotr", "Nowak", "22222222222"))?;

        let last_names = library
            .get_users()
            .into_iter()
            .map(|user| user.last_name)
            .collect::<Vec<_>>();
        assert_eq!(last_names, vec!["Kowalska", "Nowak", "zielinski"]);
        Ok(())
    }

    #[test]
    fn duplicate_national_id() -> error_stack::Result<(), KernelError> {
        let mut library = Session::default();
        library.add_user(create_user("Jan", "Kowalski", "11111111111"))?;
        let report = library
            .add_user(create_user("Anna", "Nowak", "11111111111"))
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateUser);
        assert_eq!(library.get_users().len(), 1);
        Ok(())
    }
}
