//! User Edit Flow
//!
//! Modal form bound to one user record. Submitting PUTs the whole form to
//! `{users endpoint}{id-or-email}/` and, once accepted, refetches the entire
//! users collection. A rejected update leaves the modal and the typed values
//! in place so they can be corrected and resubmitted.

use futures_util::future::{select, Either};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::pin::pin;
use thiserror::Error;

use crate::config::Endpoints;
use crate::fetch::{fetch_collection, FetchError, ResourceView, Transport};
use crate::records::{user, Record, UserRow};

/// Acknowledgment shown after a successful update
pub const UPDATE_SUCCESS_MESSAGE: &str = "User updated successfully!";

/// Acknowledgment shown when the backend refuses the update
pub const UPDATE_REJECTED_MESSAGE: &str =
    "Failed to update user. This feature may not be supported by the backend yet.";

/// Fixed fitness level choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Alias,
    Email,
    Team,
    FitnessLevel,
}

impl FormField {
    /// JSON key in the update body
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alias => "alias",
            Self::Email => "email",
            Self::Team => "team",
            Self::FitnessLevel => "fitness_level",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Hero Name",
            Self::Alias => "Real Name (Alias)",
            Self::Email => "Email",
            Self::Team => "Team",
            Self::FitnessLevel => "Fitness Level",
        }
    }
}

/// Values of the edit form, serialized as the update body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub alias: String,
    pub email: String,
    pub team: String,
    pub fitness_level: String,
}

/// Input-layer validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Unknown team '{0}'")]
    UnknownTeam(String),

    #[error("Fitness level '{0}' must be one of beginner, intermediate, advanced")]
    InvalidFitnessLevel(String),
}

impl UserForm {
    /// Copy a record's current values; missing ones become empty strings
    pub fn from_record(record: &Record) -> Self {
        let text = |fields: &[&str]| record.text(fields).unwrap_or_default();

        Self {
            name: text(user::NAME_FIELDS),
            alias: text(user::ALIAS_FIELDS),
            email: text(user::EMAIL_FIELDS),
            team: text(&["team"]),
            fitness_level: text(user::FITNESS_LEVEL_FIELDS),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Alias => &self.alias,
            FormField::Email => &self.email,
            FormField::Team => &self.team,
            FormField::FitnessLevel => &self.fitness_level,
        }
    }

    /// Write one control's value, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Alias => &mut self.alias,
            FormField::Email => &mut self.email,
            FormField::Team => &mut self.team,
            FormField::FitnessLevel => &mut self.fitness_level,
        };
        *slot = value.into();
    }

    /// Constraints a form widget enforces before the submit button works
    ///
    /// `team_options` empty means no teams were discovered; any non-empty
    /// team is then accepted.
    pub fn validate(&self, team_options: &[String]) -> Result<(), Vec<FormIssue>> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(FormIssue::Required(FormField::Name.label()));
        }
        if self.email.trim().is_empty() {
            issues.push(FormIssue::Required(FormField::Email.label()));
        } else if !self.email.contains('@') {
            issues.push(FormIssue::InvalidEmail(self.email.clone()));
        }
        if self.team.is_empty() {
            issues.push(FormIssue::Required(FormField::Team.label()));
        } else if !team_options.is_empty() && !team_options.contains(&self.team) {
            issues.push(FormIssue::UnknownTeam(self.team.clone()));
        }
        if self.fitness_level.is_empty() {
            issues.push(FormIssue::Required(FormField::FitnessLevel.label()));
        } else if FitnessLevel::parse(&self.fitness_level).is_none() {
            issues.push(FormIssue::InvalidFitnessLevel(self.fitness_level.clone()));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Acknowledgment after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    fn from_error(error: &FetchError) -> Self {
        match error {
            FetchError::UpdateRejected { detail, .. } => Notice::Failure(match detail {
                Some(detail) => format!("{} ({})", UPDATE_REJECTED_MESSAGE, detail),
                None => UPDATE_REJECTED_MESSAGE.to_string(),
            }),
            other => Notice::Failure(format!("Error updating user: {}", other)),
        }
    }
}

/// A ready-to-send update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub url: String,
    pub body: UserForm,
}

/// Update URL for a user: the collection URL, the identifier, a trailing slash
pub fn update_url(users_url: &str, identity: &str) -> String {
    format!("{}{}/", users_url, urlencoding::encode(identity))
}

/// State of the edit modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserEditor {
    editing: Option<Record>,
    form: UserForm,
    visible: bool,
    submitting: bool,
    notice: Option<Notice>,
}

impl UserEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the form to `record` and show the modal
    pub fn open(&mut self, record: &Record) {
        self.form = UserForm::from_record(record);
        self.editing = Some(record.clone());
        self.visible = true;
        self.notice = None;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Hide the modal and discard unsaved edits
    pub fn close(&mut self) {
        self.visible = false;
        self.submitting = false;
        self.editing = None;
        self.form = UserForm::default();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn editing(&self) -> Option<&Record> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Request for the record being edited, if any
    pub fn submission(&self, users_url: &str) -> Option<Submission> {
        let identity = self.editing.as_ref()?.identity()?;
        Some(Submission {
            url: update_url(users_url, &identity),
            body: self.form.clone(),
        })
    }

    /// Mark a submit in flight; `None` while one already is
    pub fn begin_submit(&mut self, users_url: &str) -> Option<Submission> {
        if self.submitting || !self.visible {
            return None;
        }

        match self.submission(users_url) {
            Some(submission) => {
                self.submitting = true;
                Some(submission)
            }
            None => {
                tracing::warn!("Edited record has neither id nor email");
                self.notice = Some(Notice::Failure(
                    "Error updating user: record has no id or email".to_string(),
                ));
                None
            }
        }
    }

    /// Apply the submit outcome; returns the refreshed users on success
    pub fn settle(&mut self, result: Result<Vec<Record>, FetchError>) -> Option<Vec<Record>> {
        self.submitting = false;

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "User updated, list refreshed");
                self.close();
                self.notice = Some(Notice::Success(UPDATE_SUCCESS_MESSAGE.to_string()));
                Some(records)
            }
            Err(e) => {
                tracing::warn!(error = %e, "User update failed");
                self.notice = Some(Notice::from_error(&e));
                None
            }
        }
    }
}

/// PUT the form, then refetch the whole users collection
pub async fn submit_user_update<T>(
    transport: &T,
    submission: &Submission,
    users_url: &str,
) -> Result<Vec<Record>, FetchError>
where
    T: Transport + ?Sized,
{
    let body =
        serde_json::to_value(&submission.body).map_err(|e| FetchError::Parse(e.to_string()))?;

    tracing::debug!(url = %submission.url, "Submitting user update");
    transport
        .put_json(&submission.url, &body)
        .await
        .map_err(FetchError::into_update_rejection)?;

    fetch_collection(transport, users_url).await
}

/// Team names offered by the team selector
pub fn team_options(teams: &[Record]) -> Vec<String> {
    teams
        .iter()
        .filter_map(|team| team.text(crate::records::team::NAME_FIELDS))
        .collect()
}

/// Team names for the selector
///
/// A teams failure only degrades the selector to no options.
pub async fn load_team_options<T>(transport: &T, teams_url: &str) -> Vec<String>
where
    T: Transport + ?Sized,
{
    match fetch_collection(transport, teams_url).await {
        Ok(teams) => team_options(&teams),
        Err(e) => {
            tracing::warn!(error = %e, "Teams fetch failed, team selector left empty");
            Vec::new()
        }
    }
}

/// The users view: its collection, the team choices and the edit modal
#[derive(Debug, Clone)]
pub struct UsersPanel {
    pub view: ResourceView<UserRow>,
    pub team_options: Vec<String>,
    pub editor: UserEditor,
    endpoints: Endpoints,
}

impl UsersPanel {
    pub fn mount(endpoints: &Endpoints) -> Self {
        Self {
            view: ResourceView::mount(endpoints),
            team_options: Vec::new(),
            editor: UserEditor::new(),
            endpoints: endpoints.clone(),
        }
    }

    /// Load users and team choices concurrently
    ///
    /// Each result lands as soon as its own fetch resolves, so a slow teams
    /// request never holds the users table in Loading.
    pub async fn load<T>(&mut self, transport: &T)
    where
        T: Transport + ?Sized,
    {
        let ticket = self.view.begin();
        let users = pin!(fetch_collection(transport, &self.endpoints.users));
        let teams = pin!(load_team_options(transport, &self.endpoints.teams));

        match select(users, teams).await {
            Either::Left((users, teams)) => {
                self.view.settle(ticket, users);
                self.team_options = teams.await;
            }
            Either::Right((options, users)) => {
                self.team_options = options;
                self.view.settle(ticket, users.await);
            }
        }
    }

    /// Open the editor on the row whose id or email is `identity`
    pub fn open_editor(&mut self, identity: &str) -> bool {
        let record = self.view.state().items().and_then(|rows| {
            rows.iter()
                .find(|row| {
                    row.key == identity
                        || row.record.text(user::EMAIL_FIELDS).as_deref() == Some(identity)
                })
                .map(|row| row.record.clone())
        });

        match record {
            Some(record) => {
                self.editor.open(&record);
                true
            }
            None => false,
        }
    }

    /// Submit the open form; `true` when the update landed
    pub async fn submit<T>(&mut self, transport: &T) -> bool
    where
        T: Transport + ?Sized,
    {
        let users_url = self.view.url().to_string();
        let Some(submission) = self.editor.begin_submit(&users_url) else {
            return false;
        };

        let result = submit_user_update(transport, &submission, &users_url).await;
        match self.editor.settle(result) {
            Some(records) => {
                self.view.replace(&records);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::mock::MockTransport;
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "http://api.test/api";

    fn endpoints() -> Endpoints {
        Endpoints::from_base(BASE)
    }

    fn rex() -> Record {
        Record::from_value(json!({
            "id": 42,
            "name": "Rex",
            "alias": "R",
            "email": "r@x.com",
            "team": "Falcons",
            "team_name": "The Falcons",
            "fitness_level": "advanced",
            "total_points": 10
        }))
    }

    #[test]
    fn test_open_copies_values() {
        let mut editor = UserEditor::new();
        editor.open(&Record::from_value(json!({"id": 1, "name": "Kit", "team": "Owls"})));

        assert!(editor.is_visible());
        assert_eq!(
            editor.form(),
            &UserForm {
                name: "Kit".into(),
                alias: String::new(),
                email: String::new(),
                team: "Owls".into(),
                fitness_level: String::new(),
            }
        );
        assert!(editor.editing().is_some());
    }

    #[test]
    fn test_field_change_preserves_others() {
        let mut editor = UserEditor::new();
        editor.open(&rex());
        editor.set_field(FormField::Alias, "Rexy");

        assert_eq!(editor.form().alias, "Rexy");
        assert_eq!(editor.form().name, "Rex");
        assert_eq!(editor.form().email, "r@x.com");
        assert_eq!(editor.form().get(FormField::FitnessLevel), "advanced");
    }

    #[test]
    fn test_close_discards() {
        let mut editor = UserEditor::new();
        editor.open(&rex());
        editor.set_field(FormField::Name, "Changed");
        editor.close();

        assert!(!editor.is_visible());
        assert!(editor.editing().is_none());
        assert_eq!(editor.form(), &UserForm::default());
    }

    #[test]
    fn test_update_url() {
        assert_eq!(update_url("http://api.test/api/users/", "42"), "http://api.test/api/users/42/");
        assert_eq!(
            update_url("http://api.test/api/users/", "r@x.com"),
            "http://api.test/api/users/r%40x.com/"
        );
    }

    #[test]
    fn test_submission_uses_email_without_id() {
        let mut editor = UserEditor::new();
        editor.open(&Record::from_value(json!({"email": "k@x.com", "name": "Kit"})));
        let submission = editor.submission(&endpoints().users).unwrap();
        assert_eq!(submission.url, "http://api.test/api/users/k%40x.com/");
    }

    #[test]
    fn test_begin_submit_without_identity() {
        let mut editor = UserEditor::new();
        editor.open(&Record::from_value(json!({"name": "Ghost"})));
        assert!(editor.begin_submit(&endpoints().users).is_none());
        assert!(!editor.notice().unwrap().is_success());
        assert!(editor.is_visible());
    }

    #[test]
    fn test_begin_submit_blocks_double_submit() {
        let mut editor = UserEditor::new();
        editor.open(&rex());
        assert!(editor.begin_submit(&endpoints().users).is_some());
        assert!(editor.is_submitting());
        assert!(editor.begin_submit(&endpoints().users).is_none());
    }

    #[test]
    fn test_validation() {
        let form = UserForm {
            name: "Rex".into(),
            alias: String::new(),
            email: "r@x.com".into(),
            team: "Falcons".into(),
            fitness_level: "advanced".into(),
        };
        let teams = vec!["Falcons".to_string(), "Owls".to_string()];
        assert!(form.validate(&teams).is_ok());
        assert!(form.validate(&[]).is_ok());

        let bad = UserForm {
            name: " ".into(),
            email: "not-an-email".into(),
            team: "Sharks".into(),
            fitness_level: "elite".into(),
            ..form.clone()
        };
        let issues = bad.validate(&teams).unwrap_err();
        assert_eq!(
            issues,
            vec![
                FormIssue::Required("Hero Name"),
                FormIssue::InvalidEmail("not-an-email".into()),
                FormIssue::UnknownTeam("Sharks".into()),
                FormIssue::InvalidFitnessLevel("elite".into()),
            ]
        );

        let empty = UserForm::default().validate(&teams).unwrap_err();
        assert_eq!(empty.len(), 4);
    }

    #[test]
    fn test_fitness_levels() {
        assert_eq!(FitnessLevel::parse("intermediate"), Some(FitnessLevel::Intermediate));
        assert_eq!(FitnessLevel::parse("Intermediate"), None);
        assert_eq!(FitnessLevel::Advanced.label(), "Advanced");
        assert_eq!(FormField::FitnessLevel.key(), "fitness_level");
    }

    #[tokio::test]
    async fn test_submit_success_refetches_and_closes() {
        let endpoints = endpoints();
        let refreshed = json!([{"id": 42, "name": "Rex", "fitness_level": "advanced"}]);
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Ok(json!([rex()])))
            .on_get(&endpoints.users, Ok(refreshed))
            .on_get(&endpoints.teams, Ok(json!([{"name": "Falcons"}])))
            .on_put("http://api.test/api/users/42/", Ok(()));

        let mut panel = UsersPanel::mount(&endpoints);
        panel.load(&transport).await;
        assert_eq!(panel.view.state().count(), 1);

        assert!(panel.open_editor("42"));
        panel.editor.set_field(FormField::Name, "Rex");
        panel.editor.set_field(FormField::Alias, "R");
        panel.editor.set_field(FormField::Email, "r@x.com");
        panel.editor.set_field(FormField::Team, "Falcons");
        panel.editor.set_field(FormField::FitnessLevel, "advanced");
        assert!(panel.editor.form().validate(&panel.team_options).is_ok());

        assert!(panel.submit(&transport).await);
        assert!(!panel.editor.is_visible());
        assert_eq!(
            panel.editor.notice(),
            Some(&Notice::Success("User updated successfully!".into()))
        );
        assert_eq!(transport.get_count(&endpoints.users), 2);

        let puts = transport.put_log.borrow();
        assert_eq!(puts.len(), 1);
        assert_eq!(
            puts[0].1,
            json!({"name": "Rex", "alias": "R", "email": "r@x.com", "team": "Falcons", "fitness_level": "advanced"})
        );

        let rows = panel.view.state().items().unwrap();
        assert_eq!(rows[0].fitness_level, "advanced");
    }

    #[tokio::test]
    async fn test_submit_rejected_keeps_form() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Ok(json!([rex()])))
            .on_get(&endpoints.teams, Ok(json!([{"name": "Falcons"}])))
            .on_put(
                "http://api.test/api/users/42/",
                Err(FetchError::Http {
                    status: 404,
                    detail: String::new(),
                }),
            );

        let mut panel = UsersPanel::mount(&endpoints);
        panel.load(&transport).await;
        assert!(panel.open_editor("42"));
        let before = panel.editor.form().clone();

        assert!(!panel.submit(&transport).await);
        assert!(panel.editor.is_visible());
        assert!(!panel.editor.is_submitting());
        assert_eq!(panel.editor.form(), &before);
        assert_eq!(
            panel.editor.notice(),
            Some(&Notice::Failure(UPDATE_REJECTED_MESSAGE.into()))
        );
        assert_eq!(transport.get_count(&endpoints.users), 1);
        assert_eq!(panel.view.state().count(), 1);
    }

    #[tokio::test]
    async fn test_submit_network_failure_reports_detail() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Ok(json!([rex()])))
            .on_get(&endpoints.teams, Ok(json!([])));

        let mut panel = UsersPanel::mount(&endpoints);
        panel.load(&transport).await;
        assert!(panel.open_editor("r@x.com"));

        // No PUT route scripted: the mock answers 404
        assert!(!panel.submit(&transport).await);
        assert!(panel.editor.is_visible());
        assert!(panel.editor.notice().unwrap().message().starts_with("Failed to update user"));
    }

    #[tokio::test]
    async fn test_teams_failure_degrades_options() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Ok(json!({"results": [rex(), {"id": 43, "name": "Kit"}]})))
            .on_get(&endpoints.teams, Err(FetchError::Http { status: 503, detail: String::new() }));

        let mut panel = UsersPanel::mount(&endpoints);
        panel.load(&transport).await;

        assert_eq!(panel.view.state().count(), 2);
        assert!(panel.team_options.is_empty());
    }

    #[tokio::test]
    async fn test_users_failure_is_view_error() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Err(FetchError::Network("connection refused".into())))
            .on_get(&endpoints.teams, Ok(json!([{"name": "Falcons"}])));

        let mut panel = UsersPanel::mount(&endpoints);
        panel.load(&transport).await;

        assert_eq!(panel.view.state().error(), Some("Network error: connection refused"));
        assert_eq!(panel.team_options, vec!["Falcons".to_string()]);
        assert!(!panel.open_editor("42"));
    }

    #[tokio::test]
    async fn test_users_settle_while_teams_stall() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get(&endpoints.users, Ok(json!([rex()])))
            .on_get_stalled(&endpoints.teams);

        let mut panel = UsersPanel::mount(&endpoints);
        let load = tokio::time::timeout(Duration::from_millis(200), panel.load(&transport)).await;

        assert!(load.is_err());
        assert!(!panel.view.state().is_loading());
        assert_eq!(panel.view.state().count(), 1);
        assert!(panel.team_options.is_empty());
        assert!(panel.open_editor("r@x.com"));
    }

    #[tokio::test]
    async fn test_team_options_land_while_users_stall() {
        let endpoints = endpoints();
        let transport = MockTransport::new()
            .on_get_stalled(&endpoints.users)
            .on_get(&endpoints.teams, Ok(json!([{"name": "Falcons"}])));

        let mut panel = UsersPanel::mount(&endpoints);
        let load = tokio::time::timeout(Duration::from_millis(200), panel.load(&transport)).await;

        assert!(load.is_err());
        assert!(panel.view.state().is_loading());
        assert_eq!(panel.team_options, vec!["Falcons".to_string()]);
    }
}
