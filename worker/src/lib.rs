//! Contact-form relay. Validates the submitted message and forwards it to an
//! HTTP mail API; nothing is stored.

use serde_json::json;
use worker::wasm_bindgen::JsValue;
use worker::*;

use hoshikuzu_core::contact::ContactMessage;

const CONTACT_PATH: &str = "/api/contact";

const MAIL_API_URL_VAR: &str = "MAIL_API_URL";
const MAIL_API_TOKEN_VAR: &str = "MAIL_API_TOKEN";
const MAIL_FROM_VAR: &str = "MAIL_FROM";
const MAIL_TO_VAR: &str = "MAIL_TO";

#[event(fetch)]
pub async fn main(mut req: Request, env: Env, _ctx: Context) -> Result<Response> {
    if req.path() != CONTACT_PATH {
        return Response::error("not found", 404);
    }
    if req.method() != Method::Post {
        return Response::error("method not allowed", 405);
    }

    let message: ContactMessage = match req.json().await {
        Ok(message) => message,
        Err(_) => return status_json(400, "invalid request body"),
    };
    if let Err(err) = message.validate() {
        return status_json(400, &err.to_string());
    }

    match relay(&env, &message).await {
        Ok(()) => status_json(200, "message sent"),
        Err(err) => {
            console_warn!("mail relay failed: {err}");
            status_json(502, "error sending message")
        }
    }
}

async fn relay(env: &Env, message: &ContactMessage) -> Result<()> {
    let api_url = env.var(MAIL_API_URL_VAR)?.to_string();
    let api_token = env.var(MAIL_API_TOKEN_VAR)?.to_string();
    let from = env.var(MAIL_FROM_VAR)?.to_string();
    let to = env.var(MAIL_TO_VAR)?.to_string();

    let payload = json!({
        "from": from,
        "to": to,
        "reply_to": message.email,
        "subject": format!("New contact from {}: {}", message.name, message.subject),
        "text": format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
            message.name, message.email, message.subject, message.message
        ),
    });

    let mut headers = Headers::new();
    headers.set("Content-Type", "application/json")?;
    headers.set("Authorization", &format!("Bearer {api_token}"))?;

    let init = RequestInit {
        method: Method::Post,
        headers,
        body: Some(JsValue::from_str(&payload.to_string())),
        ..RequestInit::default()
    };
    let request = Request::new_with_init(&api_url, &init)?;
    let response = Fetch::Request(request).send().await?;
    if response.status_code() >= 400 {
        return Err(Error::RustError(format!(
            "mail api returned {}",
            response.status_code()
        )));
    }
    Ok(())
}

fn status_json(status: u16, message: &str) -> Result<Response> {
    Ok(Response::from_json(&json!({ "message": message }))?.with_status(status))
}
