use crate::document::Document;
use crate::weather::client::WeatherClient;
use crate::weather::render::{STATUS_UPDATING, UPDATED_ID, render_failure, render_forecast};
use chrono::Local;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    page: Arc<Mutex<Document>>,
}

impl WeatherService {
    pub fn new(client: WeatherClient, page: Arc<Mutex<Document>>) -> Self {
        Self { client, page }
    }

    // The page lock is not held while the request is in flight.
    pub async fn update(&self) {
        self.page.lock().await.set_text(UPDATED_ID, STATUS_UPDATING);

        match self.client.fetch_weather().await {
            Ok(forecast) => {
                let now = Local::now().time();
                render_forecast(&mut *self.page.lock().await, &forecast, now);
            }
            Err(err) => {
                render_failure(&mut *self.page.lock().await);
                error!("weather update failed: {err}");
            }
        }
    }

    pub fn spawn_polling(self, period: Duration) -> JoinHandle<()> {
        info!(period_secs = period.as_secs(), "starting weather polling");
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.update().await;
            }
        })
    }
}
