#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(String),
    TodoUpdated(String),
    TodoDeleted(String),
    TodoNotFound(String),
    TodoTitleEmpty,
    TodoToggledDone(String),
    TodoToggledOpen(String),
    TodosHeader,
    NoTodos,
    TodoUpdateFailed(String),
    TodoDeleteFailed(String),
    ConfirmDeleteTodo(String),

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryDeleted(String),
    CategoryNotFound(String),
    CategoryNameEmpty,
    CategoryAlreadyExists(String),
    CategoryLimitReached(usize),
    CategoriesHeader,
    NoCategories,

    // === STATISTICS MESSAGES ===
    StatsHeader(String),
    StatsNoData(String),
    StatsTopCategory(String, usize),
    StatsStreak(u32, u32),

    // === INSIGHT MESSAGES (canned, rule-table selected) ===
    InsightExcellent,
    InsightStreakGoing(u32),
    InsightImproving,
    InsightSlipping,
    InsightGettingStarted,

    // === PREFERENCE MESSAGES ===
    PreferenceSet(String, String),
    PreferencesHeader,
    PreferenceUnknownValue(String, String),

    // === REMINDER MESSAGES ===
    ReminderArmed(String, String),
    ReminderSkipped(String),
    ReminderCancelled(String),

    // === AI REPORT MESSAGES ===
    AiReportHeader(String),
    AiProcrastinationHeader,
    AiDailyLimitReached(u32),
    AiConfigMissing,
    AiRequestFailed(String),
    AiEmptyResponse,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,

    // === DATABASE MESSAGES ===
    MigrationApplied(u32, String),
    MigrationsUpToDate,

    // === GENERAL MESSAGES ===
    UnexpectedError(String),
}
