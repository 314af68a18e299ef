use honeyzone_application::use_cases::AnswerQueryUseCase;
use honeyzone_domain::{Config, ZoneTable};
use honeyzone_infrastructure::dns::ZoneRequestHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub zone: Arc<ZoneTable>,
    pub handler: ZoneRequestHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zone = Arc::new(ZoneTable::from_config(&config.zone)?);

        info!(
            entries = zone.len(),
            builtin = config.zone.is_empty(),
            "Zone table loaded"
        );

        let use_case = Arc::new(AnswerQueryUseCase::new(zone.clone()));
        let handler = ZoneRequestHandler::new(use_case);

        Ok(Self { zone, handler })
    }
}
