use std::io::{BufRead, Write};

use application::transfer::{
    CreateBookDto, CreateMagazineDto, FindPublicationDto, RemovePublicationDto,
};
use time::{Date, Month};

use crate::controller::{Intake, TryIntake};
use crate::error::ConsoleError;
use crate::terminal::Terminal;

#[derive(Debug)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    publisher: String,
    year: i32,
    pages: u32,
    isbn: String,
}

impl CreateBookRequest {
    pub fn read<R: BufRead, W: Write>(
        terminal: &mut Terminal<R, W>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            title: terminal.read_text("Title:")?,
            author: terminal.read_text("Author:")?,
            publisher: terminal.read_text("Publisher:")?,
            year: terminal.read_number("Release year:")?,
            pages: terminal.read_number("Pages:")?,
            isbn: terminal.read_text("ISBN:")?,
        })
    }
}

#[derive(Debug)]
pub struct CreateMagazineRequest {
    title: String,
    publisher: String,
    language: String,
    year: i32,
    month: u8,
    day: u8,
}

impl CreateMagazineRequest {
    pub fn read<R: BufRead, W: Write>(
        terminal: &mut Terminal<R, W>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            title: terminal.read_text("Title:")?,
            publisher: terminal.read_text("Publisher:")?,
            language: terminal.read_text("Language:")?,
            year: terminal.read_number("Release year:")?,
            month: terminal.read_number("Month:")?,
            day: terminal.read_number("Day:")?,
        })
    }
}

#[derive(Debug)]
pub struct FindPublicationRequest {
    title: String,
}

impl FindPublicationRequest {
    pub fn read<R: BufRead, W: Write>(
        terminal: &mut Terminal<R, W>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            title: terminal.read_text("Title of the publication:")?,
        })
    }
}

#[derive(Debug)]
pub struct RemovePublicationRequest {
    title: String,
}

impl RemovePublicationRequest {
    pub fn read<R: BufRead, W: Write>(
        terminal: &mut Terminal<R, W>,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            title: terminal.read_text("Title of the publication to delete:")?,
        })
    }
}

pub struct PublicationTransformer;

impl Intake<CreateBookRequest> for PublicationTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            publisher: input.publisher,
            author: input.author,
            year: input.year,
            pages: input.pages,
            isbn: input.isbn,
        }
    }
}

impl TryIntake<CreateMagazineRequest> for PublicationTransformer {
    type To = CreateMagazineDto;
    type Error = ConsoleError;
    fn emit(&self, input: CreateMagazineRequest) -> Result<Self::To, Self::Error> {
        let invalid = || ConsoleError::InvalidDate {
            year: input.year,
            month: input.month,
            day: input.day,
        };
        let month = Month::try_from(input.month).map_err(|_| invalid())?;
        let release =
            Date::from_calendar_date(input.year, month, input.day).map_err(|_| invalid())?;
        Ok(CreateMagazineDto {
            title: input.title,
            publisher: input.publisher,
            release,
            language: input.language,
        })
    }
}

impl Intake<FindPublicationRequest> for PublicationTransformer {
    type To = FindPublicationDto;
    fn emit(&self, input: FindPublicationRequest) -> Self::To {
        FindPublicationDto { title: input.title }
    }
}

impl Intake<RemovePublicationRequest> for PublicationTransformer {
    type To = RemovePublicationDto;
    fn emit(&self, input: RemovePublicationRequest) -> Self::To {
        RemovePublicationDto { title: input.title }
    }
}
