use crate::dns::records::to_hickory_record;
use crate::dns::RecordTypeMapper;
use honeyzone_application::use_cases::AnswerQueryUseCase;
use honeyzone_domain::DnsQuestion;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct ZoneRequestHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl ZoneRequestHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for ZoneRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        // Only the first question is consulted; any others are ignored.
        let Some(query) = request.queries().first() else {
            warn!(client = %request.src(), "Request carries no question");
            return send_error_response(request, &mut response_handle, ResponseCode::FormErr).await;
        };

        // Lookups are case-sensitive, so use the name as sent rather than the
        // lowercased form hickory keys on.
        let domain = query.original().name().to_ascii();
        let hickory_record_type = query.query_type();
        let client_ip = request.src().ip();

        debug!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "DNS query received");

        let question = DnsQuestion::new(
            domain.as_str(),
            RecordTypeMapper::from_hickory(hickory_record_type),
        );
        let reply = self.use_case.execute(&question);

        let mut answers: Vec<Record> = Vec::with_capacity(reply.answers.len());
        for answer in &reply.answers {
            match to_hickory_record(answer) {
                Ok(record) => answers.push(record),
                Err(e) => warn!(
                    domain = %domain,
                    record_type = %answer.record_type(),
                    error = %e,
                    "Skipping unencodable answer"
                ),
            }
        }

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(reply.authoritative);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
