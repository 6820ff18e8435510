use std::io::{BufRead, Write};

use application::transfer::CreateUserDto;

use crate::controller::TryIntake;
use crate::error::ConsoleError;
use crate::terminal::Terminal;

const NATIONAL_ID_LENGTH: usize = 11;

#[derive(Debug)]
pub struct CreateUserRequest {
    first_name: String,
    last_name: String,
    national_id: String,
}

impl CreateUserRequest {
    pub fn read<R: BufRead, W: Write>(
        terminal: &mut Terminal<R, W>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            first_name: terminal.read_text("First name:")?,
            last_name: terminal.read_text("Last name:")?,
            national_id: terminal.read_text("National id:")?,
        })
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }
}

pub struct UserTransformer;

impl TryIntake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    type Error = ConsoleError;
    fn emit(&self, input: CreateUserRequest) -> Result<Self::To, Self::Error> {
        let valid = input.national_id.len() == NATIONAL_ID_LENGTH
            && input.national_id.chars().all(|c| c.is_ascii_digit());
        if !valid {
            return Err(ConsoleError::InvalidNationalId(input.national_id));
        }
        Ok(CreateUserDto {
            first_name: input.first_name,
            last_name: input.last_name,
            national_id: input.national_id,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::controller::TryIntake;
    use crate::error::ConsoleError;

    use super::{CreateUserRequest, UserTransformer};

    fn request(national_id: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            national_id: national_id.to_string(),
        }
    }

    #[test]
    fn national_id_format() {
        assert!(UserTransformer.emit(request("90010112345")).is_ok());
        assert!(matches!(
            UserTransformer.emit(request("9001011234")),
            Err(ConsoleError::InvalidNationalId(_))
        ));
        assert!(matches!(
            UserTransformer.emit(request("9001011234a")),
            Err(ConsoleError::InvalidNationalId(_))
        ));
    }
}
