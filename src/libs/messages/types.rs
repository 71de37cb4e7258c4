#[derive(Debug, Clone)]
pub enum Message {
    // === EXPORT MESSAGES ===
    ExportStarted(String),        // kind
    ExportCompleted(String),      // path
    ExportFailed(String, String), // kind, reason
    ExportRejected(String),       // kind

    // === DATA SOURCE MESSAGES ===
    RefreshingData(String), // source description
    DataRefreshed,
    DataUnavailable(String),
    NoSourceConfigured,
    ModelWarningsHeader(usize),

    // === REPORT VIEW MESSAGES ===
    ReportHeader(String), // period label
    SectionMetrics,
    SectionStatus,
    SectionChannels,
    SectionAgents,
    SectionSentiment,
    NoAgents,
    SentimentNeedsAttention(String), // tone label

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleExport,
    ConfigModuleSource,
    PromptSelectModules,
    PromptOutputDir,
    PromptFileNameHint,
    PromptPeriodLabel,
    PromptSourceUrl,
    PromptSourcePath,
    PromptTimeoutSecs,

    // === INPUT MESSAGES ===
    InvalidDateRange(String, String), // from, to
    IncompleteDateRange,
}
