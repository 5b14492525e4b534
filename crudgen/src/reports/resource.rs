//! Single-resource report data structures.

use crudgen_codegen::language::{GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from generating one resource.
#[derive(Debug)]
pub struct ResourceReport {
    /// Canonical resource name.
    pub resource: String,
    /// Application module the routes should be mounted in.
    pub app_path: String,
    /// Lines to add to the application module.
    pub mount_snippet: Vec<String>,
    pub output: GenerationOutput,
}

/// What generation produced.
#[derive(Debug)]
pub enum GenerationOutput {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for ResourceReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.output {
            GenerationOutput::Written(result) => self.render_written(out, result),
            GenerationOutput::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ResourceReport {
    fn render_written(&self, out: &mut dyn Output, result: &GenerateResult) {
        out.key_value("Resource", &self.resource);
        for path in &result.written {
            out.added_item(path);
        }
        for path in &result.skipped {
            out.kept_item(&format!("{path} (exists)"));
        }
        out.newline();

        out.section(&format!("Mount the routes in {}", self.app_path));
        for line in &self.mount_snippet {
            out.preformatted(&format!("  {line}"));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
        out.key_value(
            "Preview",
            &format!("{} files for {} (nothing written)", files.len(), self.resource),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::CapturedOutput;

    fn report(output: GenerationOutput) -> ResourceReport {
        ResourceReport {
            resource: "User".to_string(),
            app_path: "src/app.js".to_string(),
            mount_snippet: vec!["app.use('/api/users', require('./routes/userRoutes'));".to_string()],
            output,
        }
    }

    #[test]
    fn test_written_lists_files_and_mount_hint() {
        let result = GenerateResult {
            written: vec!["src/models/User.js".to_string()],
            skipped: vec!["src/middleware/errorHandler.js".to_string()],
        };
        let mut out = CapturedOutput::default();
        report(GenerationOutput::Written(result)).render(&mut out);

        assert_eq!(
            out.text(),
            "Resource: User\n  + src/models/User.js\n  = src/middleware/errorHandler.js (exists)\n\n\
             Mount the routes in src/app.js:\n  app.use('/api/users', require('./routes/userRoutes'));"
        );
    }

    #[test]
    fn test_preview_prints_contents() {
        let files = vec![PreviewFile {
            path: "src/models/User.js".to_string(),
            content: "'use strict';".to_string(),
        }];
        let mut out = CapturedOutput::default();
        report(GenerationOutput::Preview(files)).render(&mut out);

        assert_eq!(out.lines[0], "── src/models/User.js ──");
        assert_eq!(out.lines[1], "'use strict';");
        assert_eq!(out.lines[2], "Preview: 1 files for User (nothing written)");
    }
}
