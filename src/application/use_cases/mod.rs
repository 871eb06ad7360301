/// Use cases module containing application business logic orchestration
mod analyze_report;

pub use analyze_report::AnalyzeReportUseCase;
