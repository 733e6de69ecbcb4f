//! Expansion Error Types

use fsubst_diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// 校验谓词拒绝了表达式
    #[error("expression is not simplifiable")]
    Unsimplifiable,

    /// 展开过程中遇到没有定义的函数
    #[error("'{name}' is undefined")]
    UndefinedReference { name: String },
}

impl ExpandError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Unsimplifiable => Diagnostic::error(self.to_string()),
            Self::UndefinedReference { name } => Diagnostic::error(self.to_string())
                .with_note(format!("add a definition for {} to the function table", name)),
        }
    }
}

pub type ExpandResult<T> = Result<T, ExpandError>;
