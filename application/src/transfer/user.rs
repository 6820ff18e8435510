use kernel::prelude::entity::{
    DestructLibraryUser, LibraryUser, UserFirstName, UserLastName, UserNationalId,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
}

impl From<LibraryUser> for UserDto {
    fn from(value: LibraryUser) -> Self {
        let DestructLibraryUser {
            first_name,
            last_name,
            national_id,
        } = value.into_destruct();
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
}

impl From<CreateUserDto> for LibraryUser {
    fn from(value: CreateUserDto) -> Self {
        LibraryUser::new(
            UserFirstName::new(value.first_name),
            UserLastName::new(value.last_name),
            UserNationalId::new(value.national_id),
        )
    }
}
