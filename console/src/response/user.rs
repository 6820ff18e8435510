use application::transfer::UserDto;

use crate::controller::Exhaust;

pub struct UserPresenter;

impl Exhaust<()> for UserPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "User added".to_string()
    }
}

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        if input.is_empty() {
            return vec!["No users registered".to_string()];
        }
        input
            .into_iter()
            .map(|user| {
                format!(
                    "{} {}; national id: {}",
                    user.first_name, user.last_name, user.national_id
                )
            })
            .collect()
    }
}
