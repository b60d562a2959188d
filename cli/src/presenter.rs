use application::transfer::BookDto;
use error_stack::{Report, ResultExt};
use kernel::KernelError;

use crate::config::OutputFormat;
use crate::controller::TryExhaust;

pub struct BookPresenter {
    format: OutputFormat,
}

impl BookPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl TryExhaust<BookDto> for BookPresenter {
    type To = String;
    type Error = Report<KernelError>;
    fn emit(&self, input: BookDto) -> Result<Self::To, Self::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&input)
                .change_context_lazy(|| KernelError::Rendering)
                .attach_printable_lazy(|| "Failed to serialize book"),
            OutputFormat::Debug => Ok(format!("{:#?}", input)),
        }
    }
}
