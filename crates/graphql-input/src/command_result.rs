use std::process::ExitCode;

/// Everything a command wants printed, plus how the process should exit.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(message.to_string()),
            stdout: None,
        }
    }

    pub fn success(output: impl std::fmt::Display) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(output.to_string()),
        }
    }

    /// Print the captured output and hand back the exit code.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
