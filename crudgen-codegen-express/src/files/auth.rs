//! JWT middleware generator.

use crudgen_codegen::paths::ProjectLayout;
use crudgen_core::{FileRules, SourceFile};

use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile},
};

/// `middleware/auth`: bearer-token verification and token signing.
pub struct AuthFile<'a> {
    layout: &'a ProjectLayout,
    dialect: &'static dyn Dialect,
}

impl<'a> AuthFile<'a> {
    pub fn new(layout: &'a ProjectLayout, dialect: &'static dyn Dialect) -> Self {
        Self { layout, dialect }
    }
}

impl SourceFile for AuthFile<'_> {
    fn path(&self) -> String {
        self.layout.nested("middleware", "auth")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let d = self.dialect;

        ModuleFile::new(d)
            .header("JWT authentication.")
            .header("")
            .header("authenticate stores the verified token payload in res.locals.user.")
            .import(Import::default_export("jwt", "jsonwebtoken"))
            .import(Import::types("express", ["NextFunction", "Request", "Response"]))
            .section(|b| {
                b.line("const JWT_SECRET = process.env.JWT_SECRET || 'change-this-secret';");
                b.line("const JWT_EXPIRES_IN = Number(process.env.JWT_EXPIRES_IN) || 3600;");
            })
            .section(|b| {
                let sig = FnSig::new("signToken")
                    .param("payload", "object")
                    .returns("string");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("return jwt.sign(payload, JWT_SECRET, { expiresIn: JWT_EXPIRES_IN });");
                });
            })
            .section(|b| {
                let sig = FnSig::new("authenticate")
                    .param("req", "Request")
                    .param("res", "Response")
                    .param("next", "NextFunction")
                    .returns("void");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("const header = req.headers.authorization || '';");
                    b.line("const [scheme, token] = header.split(' ');");
                    b.block("if (scheme !== 'Bearer' || !token) {", "}", |b| {
                        b.line("res.status(401).json({ success: false, error: 'Authentication required' });");
                        b.line("return;");
                    });
                    b.line("try {");
                    b.indent();
                    b.line("res.locals.user = jwt.verify(token, JWT_SECRET);");
                    b.line("next();");
                    b.dedent();
                    b.block("} catch {", "}", |b| {
                        b.line("res.status(401).json({ success: false, error: 'Invalid or expired token' });");
                    });
                });
            })
            .exports(Exports::names(["signToken", "authenticate"]))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::LanguageVariant;

    use super::*;
    use crate::{JavaScript, TypeScript};

    #[test]
    fn test_javascript_auth() {
        let layout = ProjectLayout::new("src", LanguageVariant::JavaScript);
        let file = AuthFile::new(&layout, &JavaScript).generate();

        assert_eq!(file.path, "src/middleware/auth.js");
        assert!(file.content.contains("const jwt = require('jsonwebtoken');"));
        assert!(file.content.contains("res.locals.user = jwt.verify(token, JWT_SECRET);"));
        assert!(!file.content.contains("import type"));
    }

    #[test]
    fn test_typescript_auth() {
        let layout = ProjectLayout::new("src", LanguageVariant::TypeScript);
        let ts = AuthFile::new(&layout, &TypeScript).render();

        assert!(ts.contains("import jwt from 'jsonwebtoken';"));
        assert!(ts.contains("function signToken(payload: object): string {"));
        assert!(ts.contains(
            "function authenticate(req: Request, res: Response, next: NextFunction): void {"
        ));
    }
}
