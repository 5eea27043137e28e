//! Fan-out orchestration for an availability run.
//!
//! A run resolves the requested categories, looks up locations once per
//! category, filters them, and then issues one slot lookup for every
//! (category, location, date window) triple. Lookups are independent and run
//! with bounded concurrency. A timed-out lookup contributes nothing; any
//! other client error aborts the whole run.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt, TryStreamExt};
use vaxslots_core::{
    booking_url, filter_locations, partition_days, AppConfig, AppointmentRecord, Category,
    CategoryCatalog, DateWindow, Location,
};
use vaxslots_medme::{MedmeClient, MedmeError};

/// Caller-selected filters for one run.
#[derive(Debug, Clone)]
pub(crate) struct PollRequest {
    /// City allow-list, matched exactly.
    pub cities: Vec<String>,
    /// Category keys from the catalog; unknown keys are skipped.
    pub categories: Vec<String>,
    pub days: u32,
    pub today: NaiveDate,
}

/// Everything a run collected, plus coverage counters.
#[derive(Debug, Default)]
pub(crate) struct PollOutcome {
    pub records: Vec<AppointmentRecord>,
    pub slot_lookups: usize,
    pub timed_out_location_lookups: usize,
    pub timed_out_slot_lookups: usize,
}

/// One slot lookup: a filtered location, the category it was found under,
/// and one date window.
struct SlotTask<'a> {
    category: &'a Category,
    location: &'a Location,
    capability_id: i64,
    window: &'a DateWindow,
}

pub(crate) struct AvailabilityPoller {
    client: MedmeClient,
    catalog: CategoryCatalog,
    enterprise: String,
    booking_base_url: String,
    window_days: u32,
    max_concurrent: usize,
}

impl AvailabilityPoller {
    /// Build a poller and its API client from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MedmeError`] if the HTTP client cannot be constructed or
    /// the configured endpoint is not a valid URL.
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, MedmeError> {
        let client = MedmeClient::from_config(config)?;
        Ok(Self {
            client,
            catalog: config.categories.clone(),
            enterprise: config.enterprise.clone(),
            booking_base_url: config.booking_base_url.clone(),
            window_days: config.window_days,
            max_concurrent: config.max_concurrent_requests.max(1),
        })
    }

    /// Run every lookup for `request` and collect the available slots.
    ///
    /// # Errors
    ///
    /// Returns the first non-timeout [`MedmeError`] raised by any lookup.
    /// Nothing collected so far is returned in that case.
    pub(crate) async fn poll(&self, request: &PollRequest) -> Result<PollOutcome, MedmeError> {
        let categories = self.resolve_categories(&request.categories);
        let windows = partition_days(request.today, request.days, self.window_days);

        let lookups: Vec<(&Category, Option<Vec<Location>>)> = stream::iter(categories)
            .map(|category| async move {
                let found = self
                    .client
                    .fetch_locations(&category.api_name, &self.enterprise)
                    .await?;
                Ok::<_, MedmeError>((category, found))
            })
            .buffer_unordered(self.max_concurrent)
            .try_collect()
            .await?;

        let mut outcome = PollOutcome::default();
        let mut eligible: Vec<(&Category, Vec<Location>)> = Vec::with_capacity(lookups.len());
        for (category, found) in lookups {
            let Some(locations) = found else {
                outcome.timed_out_location_lookups += 1;
                continue;
            };
            let total = locations.len();
            let kept = filter_locations(locations, &request.cities);
            tracing::debug!(
                category = %category.key,
                total,
                eligible = kept.len(),
                "filtered locations"
            );
            eligible.push((category, kept));
        }

        let mut tasks = Vec::new();
        for (category, locations) in &eligible {
            for location in locations {
                let Some(capability) = &location.primary_capability else {
                    continue;
                };
                for window in &windows {
                    tasks.push(SlotTask {
                        category,
                        location,
                        capability_id: capability.id,
                        window,
                    });
                }
            }
        }
        outcome.slot_lookups = tasks.len();
        tracing::info!(
            categories = eligible.len(),
            windows = windows.len(),
            slot_lookups = tasks.len(),
            "querying slot availability"
        );

        let results: Vec<Option<Vec<AppointmentRecord>>> = stream::iter(&tasks)
            .map(|task| self.run_slot_task(task))
            .buffer_unordered(self.max_concurrent)
            .try_collect()
            .await?;

        for result in results {
            match result {
                Some(records) => outcome.records.extend(records),
                None => outcome.timed_out_slot_lookups += 1,
            }
        }

        if outcome.timed_out_location_lookups > 0 || outcome.timed_out_slot_lookups > 0 {
            tracing::warn!(
                timed_out_location_lookups = outcome.timed_out_location_lookups,
                timed_out_slot_lookups = outcome.timed_out_slot_lookups,
                slot_lookups = outcome.slot_lookups,
                "some lookups timed out; report coverage is incomplete"
            );
        }

        Ok(outcome)
    }

    /// Map requested keys to catalog entries, skipping unknown and repeated keys.
    fn resolve_categories(&self, keys: &[String]) -> Vec<&Category> {
        let mut resolved: Vec<&Category> = Vec::new();
        for key in keys {
            match self.catalog.get(key.trim()) {
                Some(category) if !resolved.iter().any(|c| c.key == category.key) => {
                    resolved.push(category);
                }
                Some(_) => {}
                None => tracing::warn!(category = %key, "unknown category; skipping"),
            }
        }
        resolved
    }

    async fn run_slot_task(
        &self,
        task: &SlotTask<'_>,
    ) -> Result<Option<Vec<AppointmentRecord>>, MedmeError> {
        let Some(slots) = self
            .client
            .fetch_slots(&task.location.id, task.capability_id, task.window)
            .await?
        else {
            return Ok(None);
        };

        let website_url = booking_url(
            &self.booking_base_url,
            &task.location.store_number,
            task.capability_id,
        );
        let records = slots
            .into_iter()
            .map(|slot| AppointmentRecord {
                location: task.location.clone(),
                category_label: task.category.label.clone(),
                start_date_time: slot.start_date_time,
                end_date_time: slot.end_date_time,
                website_url: website_url.clone(),
            })
            .collect();
        Ok(Some(records))
    }
}

#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;
