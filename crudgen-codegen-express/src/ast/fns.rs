/// A function signature; [`Dialect::fn_header`](crate::Dialect::fn_header)
/// decides whether the types are printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnSig {
    pub name: String,
    pub is_async: bool,
    pub params: Vec<(String, String)>,
    pub returns: Option<String>,
}

impl FnSig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            params: Vec::new(),
            returns: None,
        }
    }

    pub fn async_fn(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push((name.into(), ty.into()));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }
}
