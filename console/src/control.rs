use std::io::{BufRead, Write};

use application::service::{PublicationService, SaveLibraryService, UserService};
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ConsoleError;
use crate::handler::Session;
use crate::option::MenuOption;
use crate::request::{
    CreateBookRequest, CreateMagazineRequest, CreateUserRequest, FindPublicationRequest,
    PublicationTransformer, RemovePublicationRequest, UserTransformer,
};
use crate::response::{BookPresenter, MagazinePresenter, PublicationPresenter, UserPresenter};
use crate::terminal::Terminal;

/// Menu loop over one session. Runs until the exit option is chosen or input ends.
pub struct LibraryControl<R, W> {
    session: Session,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> LibraryControl<R, W> {
    pub fn new(session: Session, terminal: Terminal<R, W>) -> Self {
        Self { session, terminal }
    }

    pub fn control_loop(&mut self) -> error_stack::Result<(), ConsoleError> {
        loop {
            self.print_options().map_err(Report::new)?;
            let option = match self.read_option() {
                Ok(option) => option,
                Err(ConsoleError::EndOfInput) => MenuOption::Exit,
                Err(error) => return Err(Report::new(error)),
            };
            let result = match option {
                MenuOption::Exit => {
                    self.exit().map_err(Report::new)?;
                    return Ok(());
                }
                MenuOption::AddBook => self.add_book(),
                MenuOption::AddMagazine => self.add_magazine(),
                MenuOption::PrintBooks => self.print_books(),
                MenuOption::PrintMagazines => self.print_magazines(),
                MenuOption::DeleteBook | MenuOption::DeleteMagazine => self.delete_publication(),
                MenuOption::AddUser => self.add_user(),
                MenuOption::PrintUsers => self.print_users(),
                MenuOption::FindPublication => self.find_publication(),
            };
            match result {
                Ok(()) => {}
                Err(error) if error.is_recoverable() => {
                    self.terminal.print_line(&error).map_err(Report::new)?;
                }
                Err(ConsoleError::EndOfInput) => {
                    self.exit().map_err(Report::new)?;
                    return Ok(());
                }
                Err(error) => return Err(Report::new(error)),
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Session, Terminal<R, W>) {
        (self.session, self.terminal)
    }

    fn print_options(&mut self) -> Result<(), ConsoleError> {
        self.terminal.print_line("Choose an option:")?;
        self.terminal.print_lines(MenuOption::ALL)
    }

    fn read_option(&mut self) -> Result<MenuOption, ConsoleError> {
        loop {
            let option = self
                .terminal
                .read_number::<usize>("Option:")
                .and_then(MenuOption::try_from);
            match option {
                Ok(option) => return Ok(option),
                Err(error) if error.is_recoverable() => self.terminal.print_line(error)?,
                Err(error) => return Err(error),
            }
        }
    }

    fn report_kernel_error(
        &mut self,
        report: Report<KernelError>,
        subject: &str,
    ) -> Result<(), ConsoleError> {
        tracing::warn!("{:?}", report);
        self.terminal
            .print_line(format!("{}: {}", report.current_context(), subject))
    }

    fn add_book(&mut self) -> Result<(), ConsoleError> {
        let request = CreateBookRequest::read(&mut self.terminal)?;
        let session = &mut self.session;
        let result = Controller::new(PublicationTransformer, BookPresenter)
            .intake(request)
            .handle(|dto| {
                let title = dto.title.clone();
                session.add_book(dto).map_err(|report| (report, title))
            });
        match result {
            Ok(message) => self.terminal.print_line(message),
            Err((report, title)) => self.report_kernel_error(report, &title),
        }
    }

    fn add_magazine(&mut self) -> Result<(), ConsoleError> {
        let request = CreateMagazineRequest::read(&mut self.terminal)?;
        let session = &mut self.session;
        let result = Controller::new(PublicationTransformer, MagazinePresenter)
            .try_intake(request)?
            .handle(|dto| {
                let title = dto.title.clone();
                session.add_magazine(dto).map_err(|report| (report, title))
            });
        match result {
            Ok(message) => self.terminal.print_line(message),
            Err((report, title)) => self.report_kernel_error(report, &title),
        }
    }

    fn print_books(&mut self) -> Result<(), ConsoleError> {
        let lines = Controller::new((), BookPresenter).bypass(|| self.session.get_books());
        self.terminal.print_lines(lines)
    }

    fn print_magazines(&mut self) -> Result<(), ConsoleError> {
        let lines = Controller::new((), MagazinePresenter).bypass(|| self.session.get_magazines());
        self.terminal.print_lines(lines)
    }

    /// Backs both "delete book" and "delete magazine"; either removes whatever holds the title.
    fn delete_publication(&mut self) -> Result<(), ConsoleError> {
        let request = RemovePublicationRequest::read(&mut self.terminal)?;
        let session = &mut self.session;
        let message = Controller::new(PublicationTransformer, PublicationPresenter)
            .intake(request)
            .present(|dto| session.remove_publication(dto));
        self.terminal.print_line(message)
    }

    fn add_user(&mut self) -> Result<(), ConsoleError> {
        let request = CreateUserRequest::read(&mut self.terminal)?;
        let national_id = request.national_id().to_string();
        let session = &mut self.session;
        let result = Controller::new(UserTransformer, UserPresenter)
            .try_intake(request)?
            .handle(|dto| session.add_user(dto));
        match result {
            Ok(message) => self.terminal.print_line(message),
            Err(report) => self.report_kernel_error(report, &national_id),
        }
    }

    fn print_users(&mut self) -> Result<(), ConsoleError> {
        let lines = Controller::new((), UserPresenter).bypass(|| self.session.get_users());
        self.terminal.print_lines(lines)
    }

    fn find_publication(&mut self) -> Result<(), ConsoleError> {
        let request = FindPublicationRequest::read(&mut self.terminal)?;
        let session = &self.session;
        let message = Controller::new(PublicationTransformer, PublicationPresenter)
            .intake(request)
            .present(|dto| session.find_publication(dto));
        self.terminal.print_line(message)
    }

    fn exit(&mut self) -> Result<(), ConsoleError> {
        match self.session.save_library() {
            Ok(()) => self.terminal.print_line("Library saved")?,
            Err(report) => {
                tracing::error!("{:?}", report);
                self.terminal
                    .print_line(format!("{}", report.current_context()))?;
            }
        }
        self.terminal.print_line("Bye")
    }
}
