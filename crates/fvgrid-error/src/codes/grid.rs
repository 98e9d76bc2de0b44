//! Grid construction and discretization errors.

use crate::domain::{DomainInfo, ErrorDomain};
use crate::severity::Severity;

/// Errors raised by the grid builders and coordinate distributions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum GridErr {
    /// Number of volumes N <= 0.
    InvalidN = 1,
    /// Domain bounds with B <= A.
    InvalidDomain = 2,
    /// Unknown centering (cell/face/vertex).
    InvalidCentering = 3,
    /// Unknown distribution (uniform, tanh, ...).
    InvalidDistribution = 4,
    /// Required distribution options absent.
    MissingOptions = 5,
    /// Distribution options outside their valid range.
    OptionsOutOfRange = 6,
    /// At least one cell size is non-positive.
    DegenerateMesh = 7,
    /// Face coordinates not strictly increasing.
    NonIncreasingFaces = 8,
    /// Center coordinates not strictly increasing.
    NonIncreasingCenters = 9,
    /// NaN coordinate produced.
    NaNCoordinate = 10,
    /// Infinite coordinate produced.
    InfCoordinate = 11,
    /// Requested execution policy unsupported; serial fallback.
    ExecPolicyUnsupported = 12,
    /// Parallel backend requested but not available.
    ParallelBackendMissing = 13,
    /// Builder driven in an invalid or incomplete state.
    BuilderStateInvalid = 14,
}

impl ErrorDomain for GridErr {
    const DOMAIN_ID: u16 = 0x0003;
    const DOMAIN_NAME: &'static str = "Grid";

    #[inline]
    fn value(self) -> u16 {
        self as u16
    }

    fn lookup(value: u16) -> DomainInfo {
        match value {
            1 => DomainInfo::new(
                "GRID_INVALID_N",
                Severity::Error,
                "Invalid number of volumes N: {N} (must be > 0).",
                "Número de volumes N inválido: {N} (deve ser > 0).",
            ),
            2 => DomainInfo::new(
                "GRID_INVALID_DOMAIN",
                Severity::Error,
                "Invalid domain: B <= A (A={A}, B={B}).",
                "Domínio inválido: B <= A (A={A}, B={B}).",
            ),
            3 => DomainInfo::new(
                "GRID_INVALID_CENTERING",
                Severity::Error,
                "Unsupported or unknown centering: {center}.",
                "Centering desconhecido ou não suportado: {center}.",
            ),
            4 => DomainInfo::new(
                "GRID_INVALID_DISTRIBUTION",
                Severity::Error,
                "Unsupported or unknown distribution: {dist}.",
                "Distribuição desconhecida ou não suportada: {dist}.",
            ),
            5 => DomainInfo::new(
                "GRID_MISSING_OPTIONS",
                Severity::Error,
                "Required distribution options are missing for {dist}.",
                "Opções obrigatórias da distribuição ausentes para {dist}.",
            ),
            6 => DomainInfo::new(
                "GRID_OPTIONS_OUT_OF_RANGE",
                Severity::Error,
                "Distribution options out of valid range (e.g., w_lo={w_lo}, w_hi={w_hi}).",
                "Opções da distribuição fora da faixa válida (ex.: w_lo={w_lo}, w_hi={w_hi}).",
            ),
            7 => DomainInfo::new(
                "GRID_DEGENERATE_MESH",
                Severity::Error,
                "Degenerate mesh: at least one cell size is non-positive.",
                "Malha degenerada: ao menos um tamanho de célula é não-positivo.",
            ),
            8 => DomainInfo::new(
                "GRID_NON_INCREASING_FACES",
                Severity::Error,
                "Faces must be strictly increasing; violation at index {i}.",
                "Faces devem ser estritamente crescentes; violação no índice {i}.",
            ),
            9 => DomainInfo::new(
                "GRID_NON_INCREASING_CENTERS",
                Severity::Error,
                "Centers must be strictly increasing; violation at index {i}.",
                "Centros devem ser estritamente crescentes; violação no índice {i}.",
            ),
            10 => DomainInfo::new(
                "GRID_NAN_COORDINATE",
                Severity::Error,
                "Coordinate has NaN at index {i}.",
                "Coordenada com NaN no índice {i}.",
            ),
            11 => DomainInfo::new(
                "GRID_INF_COORDINATE",
                Severity::Error,
                "Coordinate has +/-inf at index {i}.",
                "Coordenada com +/-inf no índice {i}.",
            ),
            12 => DomainInfo::new(
                "GRID_EXEC_POLICY_UNSUPPORTED",
                Severity::Warning,
                "Requested execution policy is unsupported; falling back to serial.",
                "Política de execução solicitada não suportada; retornando ao modo serial.",
            ),
            13 => DomainInfo::new(
                "GRID_PAR_BACKEND_MISSING",
                Severity::Warning,
                "Parallel execution requested but backend is missing (e.g., TBB).",
                "Execução paralela solicitada, mas o backend está ausente (ex.: TBB).",
            ),
            14 => DomainInfo::new(
                "GRID_BUILDER_STATE_INVALID",
                Severity::Error,
                "Grid1DBuilder used in an invalid or incomplete state.",
                "Grid1DBuilder usado em estado inválido ou incompleto.",
            ),
            _ => DomainInfo::MISSING,
        }
    }
}
