use crate::*;
use near_sdk::serde_json;

#[near]
impl Contract {
    pub fn nft_metadata(&self) -> NFTContractMetadata {
        NFTContractMetadata {
            spec: "nft-2.0.0".to_string(),
            name: self.metadata.name.clone(),
            symbol: self.metadata.symbol.clone(),
            icon: self.metadata.icon.clone(),
            base_uri: (!self.base_uri.is_empty()).then(|| self.base_uri.clone()),
            reference: self.metadata.reference.clone(),
            reference_hash: self.metadata.reference_hash.clone(),
        }
    }

    /// `base_uri` joined with the token id; `None` for unknown tokens.
    pub fn token_uri(&self, token_id: String) -> Option<String> {
        self.tokens_by_id
            .contains_key(&token_id)
            .then(|| self.uri_for(&token_id))
    }
}

impl Contract {
    // No separator is inserted; base URIs are expected to end in `/`.
    pub(crate) fn uri_for(&self, token_id: &str) -> String {
        format!("{}{}", self.base_uri, token_id)
    }

    pub(crate) fn token_metadata(&self, token_id: &str, token: &Token) -> TokenMetadata {
        let extra = serde_json::json!({ "cohort_id": cohort_id_from_token_id(token_id) }).to_string();
        let uri = (!self.base_uri.is_empty()).then(|| self.uri_for(token_id));
        TokenMetadata {
            title: Some(format!("{} #{}", self.metadata.name, token_id)),
            description: None,
            media: uri.clone(),
            media_hash: None,
            copies: None,
            issued_at: Some(token.issued_at),
            expires_at: None,
            starts_at: None,
            updated_at: None,
            extra: Some(extra),
            reference: uri,
            reference_hash: None,
        }
    }
}
