use async_trait::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        ActivityAction, ActivityKind, CreateEventRequest, Event, EventFilter, UpdateEventRequest,
    },
    error::Result,
    repository::{data_store::take_id, DataStore, EventRepository},
};

#[async_trait]
impl EventRepository for DataStore {
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let today = Utc::now().date_naive();
        let mut events: Vec<Event> = self
            .read(|state| {
                state.events.iter()
                    .filter(|e| filter.matches(e, today))
                    .cloned()
                    .collect()
            })
            .await;

        events.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Event>> {
        Ok(self
            .read(|state| state.events.iter().find(|e| e.id == id).cloned())
            .await)
    }

    async fn create(&self, request: CreateEventRequest, actor: &str) -> Result<Event> {
        let event = self.mutate(|state| {
            let now = Utc::now();
            let id = take_id(&mut state.next_id.events);

            let event = Event {
                id,
                title: request.title,
                description: request.description,
                date: request.date,
                time: request.time,
                location: request.location,
                category: request.category,
                featured: request.featured,
                image: request.image,
                registration_required: request.registration_required,
                max_attendees: request.max_attendees,
                current_attendees: request.current_attendees,
                created_at: now,
                updated_at: now,
            };

            state.events.push(event.clone());
            state.log_activity(ActivityKind::Event, ActivityAction::Created, &event.title, actor);
            event
        })
        .await?;

        tracing::info!("Created event {} ({}) on {}", event.id, event.title, event.date);
        Ok(event)
    }

    async fn update(&self, id: u64, request: UpdateEventRequest, actor: &str) -> Result<Option<Event>> {
        let updated = self.mutate_existing(|state| {
            let event = state.events.iter_mut().find(|e| e.id == id)?;

            event.apply(request);
            event.updated_at = Utc::now();
            let event = event.clone();

            state.log_activity(ActivityKind::Event, ActivityAction::Updated, &event.title, actor);
            Some(event)
        })
        .await?;

        if updated.is_some() {
            tracing::info!("Updated event {}", id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64, actor: &str) -> Result<bool> {
        let removed = self.mutate_existing(|state| {
            let index = state.events.iter().position(|e| e.id == id)?;
            let event = state.events.remove(index);
            state.log_activity(ActivityKind::Event, ActivityAction::Deleted, &event.title, actor);
            Some(())
        })
        .await?;

        if removed.is_some() {
            tracing::info!("Deleted event {}", id);
        }
        Ok(removed.is_some())
    }
}
