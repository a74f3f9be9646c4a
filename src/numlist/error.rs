use std::fmt;
use thiserror::Error;

/// Which side of a division failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Dividend,
    Divisor,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Dividend => write!(f, "dividendo"),
            Operand::Divisor => write!(f, "divisor"),
        }
    }
}

/// The operation that refused to run on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Statistics,
    Sort,
    EvenFilter,
    Export,
}

impl ListAction {
    pub fn empty_list_message(&self) -> &'static str {
        match self {
            ListAction::Statistics => "não há números para calcular estatísticas",
            ListAction::Sort => "Nenhum número na lista para ordenar",
            ListAction::EvenFilter => "A lista está vazia, não há números pares",
            ListAction::Export => "A lista está vazia, não há o que exportar",
        }
    }
}

#[derive(Error, Debug)]
pub enum NumlistError {
    #[error("Entrada inválida. Por favor, digite um número inteiro.")]
    InvalidInteger(String),

    #[error("Entrada inválida para o {0}.")]
    InvalidOperand(Operand),

    #[error("O número {0} é negativo. Não foi adicionado.")]
    NegativeValue(i64),

    #[error("O índice está fora do alcance.")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("{}", .0.empty_list_message())]
    EmptyList(ListAction),

    #[error("A lista não contém números pares")]
    NoEvenNumbers,

    #[error("Divisão por zero não é permitida.")]
    DivisionByZero,

    #[error("Erro ao criar o arquivo: {0}")]
    ExportCreate(#[source] std::io::Error),

    #[error("Erro ao escrever no arquivo: {0}")]
    ExportWrite(#[source] std::io::Error),

    #[error("Failed to read input: {0}")]
    InputStream(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl NumlistError {
    /// Errors the menu reports and moves past. Everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            NumlistError::InputStream(_)
                | NumlistError::Io(_)
                | NumlistError::Serialization(_)
                | NumlistError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NumlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_names_which_side_failed() {
        assert_eq!(
            NumlistError::InvalidOperand(Operand::Dividend).to_string(),
            "Entrada inválida para o dividendo."
        );
        assert_eq!(
            NumlistError::InvalidOperand(Operand::Divisor).to_string(),
            "Entrada inválida para o divisor."
        );
    }

    #[test]
    fn empty_list_message_depends_on_action() {
        assert_eq!(
            NumlistError::EmptyList(ListAction::Sort).to_string(),
            "Nenhum número na lista para ordenar"
        );
        assert_eq!(
            NumlistError::EmptyList(ListAction::Export).to_string(),
            "A lista está vazia, não há o que exportar"
        );
    }

    #[test]
    fn operation_errors_are_recoverable() {
        assert!(NumlistError::DivisionByZero.is_recoverable());
        assert!(NumlistError::NegativeValue(-3).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(NumlistError::ExportCreate(io).is_recoverable());
    }

    #[test]
    fn stream_errors_are_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!NumlistError::InputStream(io).is_recoverable());
        assert!(!NumlistError::Config("bad".into()).is_recoverable());
    }
}
