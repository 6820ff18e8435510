use time::{Date, Month};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct MagazineRelease(Date);

impl MagazineRelease {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Builds a release date from calendar parts, rejecting impossible dates such as 31 February.
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, time::error::ComponentRange> {
        let month = Month::try_from(month)?;
        Date::from_calendar_date(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month().into()
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }
}

#[cfg(test)]
mod test {
    use super::MagazineRelease;

    #[test]
    fn calendar_parts() {
        let release = MagazineRelease::from_calendar(2024, 3, 12).unwrap();
        assert_eq!(release.year(), 2024);
        assert_eq!(release.month(), 3);
        assert_eq!(release.day(), 12);
    }

    #[test]
    fn impossible_date() {
        assert!(MagazineRelease::from_calendar(2023, 2, 29).is_err());
        assert!(MagazineRelease::from_calendar(2024, 13, 1).is_err());
        assert!(MagazineRelease::from_calendar(2024, 0, 1).is_err());
    }
}
