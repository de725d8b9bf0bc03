use serde::{Deserialize, Serialize};

/// Application status (lifecycle state of a service request)
///
/// Open statuses are the stages a pipeline may contain. Completed ends the
/// happy path; Rejected, Cancelled and Archived are terminal variants that sit
/// outside every pipeline and can be reached from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Scoping,
    QuoteSent,
    DocumentsPending,
    InProgress,
    AwaitingAuthority,
    Review,
    Completed,
    Rejected,
    Cancelled,
    Archived,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 11] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Scoping,
        ApplicationStatus::QuoteSent,
        ApplicationStatus::DocumentsPending,
        ApplicationStatus::InProgress,
        ApplicationStatus::AwaitingAuthority,
        ApplicationStatus::Review,
        ApplicationStatus::Completed,
        ApplicationStatus::Rejected,
        ApplicationStatus::Cancelled,
        ApplicationStatus::Archived,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Scoping => "scoping",
            ApplicationStatus::QuoteSent => "quote_sent",
            ApplicationStatus::DocumentsPending => "documents_pending",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::AwaitingAuthority => "awaiting_authority",
            ApplicationStatus::Review => "review",
            ApplicationStatus::Completed => "completed",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Cancelled => "cancelled",
            ApplicationStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL.iter().copied().find(|status| status.as_str() == normalized)
    }

    /// Terminal variants never appear inside a pipeline
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled | Self::Archived)
    }

    /// Whether the SLA clock stops once a request reaches this status
    pub fn stops_sla_clock(&self) -> bool {
        *self == Self::Completed || self.is_terminal()
    }

    /// English and Arabic display labels
    pub const fn labels(&self) -> (&'static str, &'static str) {
        match self {
            ApplicationStatus::Submitted => ("Submitted", "تم التقديم"),
            ApplicationStatus::Scoping => ("Scoping", "تحديد النطاق"),
            ApplicationStatus::QuoteSent => ("Quote Sent", "تم إرسال العرض"),
            ApplicationStatus::DocumentsPending => ("Documents Pending", "بانتظار المستندات"),
            ApplicationStatus::InProgress => ("In Progress", "قيد التنفيذ"),
            ApplicationStatus::AwaitingAuthority => ("Awaiting Authority", "بانتظار الجهة الحكومية"),
            ApplicationStatus::Review => ("Review", "المراجعة"),
            ApplicationStatus::Completed => ("Completed", "مكتمل"),
            ApplicationStatus::Rejected => ("Rejected", "مرفوض"),
            ApplicationStatus::Cancelled => ("Cancelled", "ملغى"),
            ApplicationStatus::Archived => ("Archived", "مؤرشف"),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
