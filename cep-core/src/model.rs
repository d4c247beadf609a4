use serde::{Deserialize, Serialize};

/// Address as returned by ViaCEP. Missing fields decode to empty strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ViaCepRecord {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

/// Address as returned by ApiCEP. Missing fields decode to zero values.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiCepRecord {
    pub code: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub status: i64,
    pub ok: bool,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    ViaCep(ViaCepRecord),
    ApiCep(ApiCepRecord),
}

/// A successful provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub provider: String,
    /// The exact URL that was requested.
    pub url: String,
    pub address: Address,
    pub latency_ms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viacep_decodes_all_fields() {
        let json = r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#;
        let rec: ViaCepRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.logradouro, "Praça da Sé");
        assert_eq!(rec.siafi, "7107");
    }

    #[test]
    fn apicep_uses_camel_case_status_text() {
        let json = r#"{"code":"01001-000","state":"SP","city":"São Paulo","district":"Sé",
            "address":"Praça da Sé - lado ímpar","status":200,"ok":true,"statusText":"ok"}"#;
        let rec: ApiCepRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.status, 200);
        assert!(rec.ok);
        assert_eq!(rec.status_text, "ok");
    }

    #[test]
    fn partial_body_yields_zero_values() {
        let rec: ApiCepRecord = serde_json::from_str(r#"{"code":"99999-999"}"#).unwrap();
        assert_eq!(rec.code, "99999-999");
        assert_eq!(rec.status, 0);
        assert!(!rec.ok);
        assert_eq!(rec.status_text, "");

        // ViaCEP answers unknown codes with {"erro": true}
        let rec: ViaCepRecord = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert_eq!(rec, ViaCepRecord::default());
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        let res = serde_json::from_str::<ApiCepRecord>(r#"{"status":"200"}"#);
        assert!(res.is_err());
    }
}
