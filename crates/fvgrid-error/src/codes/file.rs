//! Filesystem and export I/O errors.

use crate::domain::{DomainInfo, ErrorDomain};
use crate::severity::Severity;

/// Errors raised by file access and the export routines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FileErr {
    /// Path does not exist.
    FileNotFound = 1,
    /// Permission denied.
    AccessDenied = 2,
    /// Read failed: corruption, unexpected EOF, hardware.
    ReadError = 3,
    /// Write failed: disk full, hardware.
    WriteError = 4,
    /// Path is syntactically invalid or empty.
    InvalidPath = 5,
}

impl ErrorDomain for FileErr {
    const DOMAIN_ID: u16 = 0x0002;
    const DOMAIN_NAME: &'static str = "File";

    #[inline]
    fn value(self) -> u16 {
        self as u16
    }

    fn lookup(value: u16) -> DomainInfo {
        match value {
            1 => DomainInfo::new(
                "FILE_NOT_FOUND",
                Severity::Error,
                "File not found: {path}.",
                "Arquivo não encontrado: {path}.",
            ),
            2 => DomainInfo::new(
                "FILE_ACCESS_DENIED",
                Severity::Error,
                "Access denied to file: {path}.",
                "Acesso negado ao arquivo: {path}.",
            ),
            3 => DomainInfo::new(
                "FILE_READ_ERROR",
                Severity::Error,
                "An error occurred while reading the file: {path}.",
                "Ocorreu um erro ao ler o arquivo: {path}.",
            ),
            4 => DomainInfo::new(
                "FILE_WRITE_ERROR",
                Severity::Error,
                "An error occurred while writing to the file: {path}.",
                "Ocorreu um erro ao escrever no arquivo: {path}.",
            ),
            5 => DomainInfo::new(
                "FILE_INVALID_PATH",
                Severity::Error,
                "The provided path is invalid: {path}.",
                "O caminho fornecido é inválido: {path}.",
            ),
            _ => DomainInfo::MISSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::code;
    use crate::language::Language;

    #[test]
    fn domain_id_is_distinct_from_core() {
        assert_eq!(FileErr::DOMAIN_ID, 0x0002);
        assert_eq!(code(FileErr::FileNotFound), 0x0002_0001);
    }

    #[test]
    fn every_value_is_an_error_with_a_path_placeholder() {
        for v in [
            FileErr::FileNotFound,
            FileErr::AccessDenied,
            FileErr::ReadError,
            FileErr::WriteError,
            FileErr::InvalidPath,
        ] {
            assert_eq!(v.default_severity(), Severity::Error, "{:?}", v);
            assert!(v.template(Language::EnUs).contains("{path}"), "{:?}", v);
            assert!(v.template(Language::PtBr).contains("{path}"), "{:?}", v);
        }
    }

    #[test]
    fn undeclared_value_yields_missing_row() {
        assert_eq!(FileErr::lookup(6), DomainInfo::MISSING);
    }
}
