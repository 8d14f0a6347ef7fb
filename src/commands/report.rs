//! Console reporting and error/warning accounting.

use std::fmt::Display;
use std::process::ExitCode;

const RULE_WIDTH: usize = 50;

/// Totals for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    /// The run stopped before validating packages.
    pub aborted: bool,
}

impl Summary {
    /// Warnings never fail a run.
    pub fn is_success(&self) -> bool {
        !self.aborted && self.errors == 0
    }

    /// Process exit status: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Prints status lines to stdout while counting errors and warnings.
#[derive(Debug, Default)]
pub struct Report {
    summary: Summary,
    nested: bool,
}

impl Report {
    /// Creates an empty report with zero counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the opening line of a run.
    pub fn banner(&self) {
        println!("🔍 Validating package registry...");
    }

    /// Start a titled section; following lines are indented beneath it.
    pub fn section(&mut self, title: impl Display) {
        println!();
        println!("{}", title);
        self.nested = true;
    }

    /// Prints an informational line as given. Not counted.
    pub fn line(&self, message: impl Display) {
        println!("{}{}", self.indent(), message);
    }

    /// Prints a passed check. Not counted.
    pub fn ok(&self, message: impl Display) {
        println!("{}✅ {}", self.indent(), message);
    }

    /// Prints a check that was not performed. Not counted.
    pub fn skipped(&self, message: impl Display) {
        println!("{}⏭️  {}", self.indent(), message);
    }

    /// Prints and counts a warning. Warnings never fail a run.
    pub fn warning(&mut self, message: impl Display) {
        println!("{}⚠️  {}", self.indent(), message);
        self.summary.warnings += 1;
    }

    /// Prints and counts an error.
    pub fn error(&mut self, message: impl Display) {
        println!("{}❌ {}", self.indent(), message);
        self.summary.errors += 1;
    }

    /// Report an error that stops the run.
    pub fn fatal(&mut self, message: impl Display) {
        println!("❌ {}", message);
        self.summary.errors += 1;
        self.summary.aborted = true;
    }

    /// Print the summary block (unless the run was aborted) and return the totals.
    pub fn finish(self) -> Summary {
        if self.summary.aborted {
            return self.summary;
        }

        println!();
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("📊 Validation Summary");
        println!("   Errors:   {}", self.summary.errors);
        println!("   Warnings: {}", self.summary.warnings);
        if self.summary.is_success() {
            println!("✅ Registry is valid!");
        } else {
            println!("❌ Registry validation failed");
        }

        self.summary
    }

    fn indent(&self) -> &'static str {
        if self.nested { "   " } else { "" }
    }
}
