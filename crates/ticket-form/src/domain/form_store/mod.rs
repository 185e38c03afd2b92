//! The live form state.
//!
//! [`FormStore`] owns the single editable [`Submission`], the current
//! [`ErrorSet`], and the last issued [`Ticket`]. It is a caller-owned value:
//! nothing here is global, so independent stores can coexist.
//!
//! Editing a field clears that field's error straight away without running
//! validation again; the real check only runs on [`FormStore::submit`].

use tracing::{debug, info, warn};

use super::ports::{
    CacheKey, RandomTicketIds, SubmissionCache, SubmissionCacheError, TicketDisplay,
    TicketDisplayError, TicketIdSource,
};
use super::{AvatarUpload, ErrorSet, FormField, Submission, Ticket, issue_with, validate};
use crate::config::FormSettings;

/// Where the form sits in its edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits with no outstanding errors.
    Editing,
    /// The last submit failed and at least one field error is still shown.
    EditingWithErrors,
    /// A ticket was issued and nothing has been edited since.
    TicketIssued,
}

/// Result of [`FormStore::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are also kept on the store.
    Rejected(ErrorSet),
    /// Validation passed and a new ticket superseded any previous one.
    Issued(Ticket),
}

/// Single live form instance backed by a [`SubmissionCache`].
#[derive(Debug)]
pub struct FormStore<C, I = RandomTicketIds> {
    cache: C,
    ids: I,
    key: CacheKey,
    persist_on_update: bool,
    submission: Submission,
    errors: ErrorSet,
    ticket: Option<Ticket>,
    edited_since_submit: bool,
}

impl<C> FormStore<C, RandomTicketIds>
where
    C: SubmissionCache,
{
    /// Create a store, restoring the last cached submission if there is one.
    ///
    /// A missing, unreadable or malformed cache entry yields an all-empty
    /// submission; restoring never fails.
    #[must_use]
    pub fn restore(cache: C, settings: &FormSettings) -> Self {
        Self::restore_with_ids(cache, RandomTicketIds, settings)
    }
}

impl<C, I> FormStore<C, I>
where
    C: SubmissionCache,
    I: TicketIdSource,
{
    /// Like [`FormStore::restore`], drawing ticket identifiers from `ids`.
    #[must_use]
    pub fn restore_with_ids(cache: C, ids: I, settings: &FormSettings) -> Self {
        let key = settings.cache_key.clone();
        let submission = load_submission(&cache, &key);
        Self {
            cache,
            ids,
            key,
            persist_on_update: settings.persist_on_update,
            submission,
            errors: ErrorSet::new(),
            ticket: None,
            edited_since_submit: false,
        }
    }

    /// Set `field` to `value` and clear that field's error.
    ///
    /// The new snapshot is written through to the cache when
    /// `persist_on_update` is enabled. Write failures are logged and
    /// otherwise ignored.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.submission.set(field, value);
        if self.errors.clear(field).is_some() {
            debug!(field = %field, "cleared field error on edit");
        }
        self.edited_since_submit = true;

        if self.persist_on_update {
            if let Err(err) = self.persist() {
                warn!(key = %self.key, error = %err, "failed to cache form snapshot");
            }
        }
    }

    /// Store an avatar handed over by the file-picker collaborator.
    pub fn update_avatar(&mut self, upload: AvatarUpload) {
        self.update(FormField::Avatar, upload.into_value());
    }

    /// Write the current submission to the cache.
    ///
    /// # Errors
    ///
    /// Returns the cache adapter's error when serialisation or the write
    /// fails.
    pub fn persist(&self) -> Result<(), SubmissionCacheError> {
        let snapshot = serde_json::to_string(&self.submission)
            .map_err(|err| SubmissionCacheError::backend(err.to_string()))?;
        self.cache.put(&self.key, &snapshot)?;
        debug!(key = %self.key, bytes = snapshot.len(), "cached form snapshot");
        Ok(())
    }

    /// Validate the current submission and issue a ticket when it passes.
    ///
    /// The store's error set is replaced wholesale by the validation result.
    /// On success the new ticket supersedes any earlier one.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.submission);
        self.edited_since_submit = false;

        if !self.errors.is_empty() {
            debug!(error_count = self.errors.len(), "submission rejected");
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let ticket = issue_with(&self.ids, &self.submission);
        info!(ticket_id = %ticket.id(), "ticket issued");
        self.ticket = Some(ticket.clone());
        SubmitOutcome::Issued(ticket)
    }

    /// Submit and hand any issued ticket to `display`.
    ///
    /// # Errors
    ///
    /// Returns the display adapter's error. The ticket is kept on the store
    /// even when presenting it fails.
    pub fn submit_to<D>(&mut self, display: &D) -> Result<SubmitOutcome, TicketDisplayError>
    where
        D: TicketDisplay + ?Sized,
    {
        let outcome = self.submit();
        if let SubmitOutcome::Issued(ticket) = &outcome {
            display.present(ticket)?;
        }
        Ok(outcome)
    }

    /// The submission as currently edited.
    #[must_use]
    pub const fn current_submission(&self) -> &Submission {
        &self.submission
    }

    /// Errors from the last submit, minus fields edited since.
    #[must_use]
    pub const fn current_errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// The most recently issued ticket.
    #[must_use]
    pub const fn current_ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Current edit/submit phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if !self.errors.is_empty() {
            FormPhase::EditingWithErrors
        } else if self.ticket.is_some() && !self.edited_since_submit {
            FormPhase::TicketIssued
        } else {
            FormPhase::Editing
        }
    }

    /// The cache adapter backing this store.
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}

fn load_submission<C: SubmissionCache>(cache: &C, key: &CacheKey) -> Submission {
    let raw = match cache.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = %key, "no cached submission; starting empty");
            return Submission::default();
        }
        Err(err) => {
            warn!(key = %key, error = %err, "cache read failed; starting empty");
            return Submission::default();
        }
    };

    match serde_json::from_str::<Submission>(&raw) {
        Ok(submission) => {
            debug!(key = %key, "restored cached submission");
            submission
        }
        Err(err) => {
            warn!(key = %key, error = %err, "discarding malformed cached submission");
            Submission::default()
        }
    }
}
