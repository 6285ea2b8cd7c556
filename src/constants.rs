pub const ROOT_QUESTION: &str = "Dor intensa?";
pub const BREATHING_QUESTION: &str = "Dificuldade de respirar?";
pub const ACCIDENT_QUESTION: &str = "Acidente recente?";

pub const CONDITION_YES: &str = "Sim";
pub const CONDITION_NO: &str = "Não";

pub const OUTCOME_EMERGENCY: &str = "EMERGÊNCIA";
pub const OUTCOME_URGENT: &str = "URGÊNCIA";
pub const OUTCOME_NOT_URGENT: &str = "NÃO URGENTE";

/// Indentation used per depth level when rendering a tree.
pub const INDENT: &str = "      ";
