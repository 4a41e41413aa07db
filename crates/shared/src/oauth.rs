//! OAuth 1.0a request signing (HMAC-SHA1) for the Twitter v1.1 API.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;

use crate::config::TwitterCredentials;

type HmacSha1 = Hmac<Sha1>;

pub struct OAuthSigner {
    credentials: TwitterCredentials,
}

impl OAuthSigner {
    pub fn new(credentials: TwitterCredentials) -> Self {
        Self { credentials }
    }

    /// `Authorization` header for a request with no body parameters.
    /// Query parameters are taken from `url`.
    pub fn authorization_header(&self, method: &str, url: &Url) -> String {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, &[], &nonce, &timestamp)
    }

    fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        body_params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut all_params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        all_params.extend(body_params.iter().cloned());
        all_params.extend(oauth_params.iter().cloned());

        let signature = self.signature(method, url, &all_params);
        oauth_params.push(("oauth_signature".to_string(), signature));
        oauth_params.sort();

        let fields: Vec<String> = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect();

        format!("OAuth {}", fields.join(", "))
    }

    fn signature(&self, method: &str, url: &Url, params: &[(String, String)]) -> String {
        let mut encoded: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (encode(k), encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            encode(&base_url(url)),
            encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            encode(&self.credentials.consumer_secret),
            encode(&self.credentials.access_token_secret)
        );

        let mut mac =
            HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC accepts keys of any size");
        mac.update(base_string.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

fn base_url(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    base.to_string()
}

// RFC 3986 unreserved set, which is what OAuth 1.0a requires
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
