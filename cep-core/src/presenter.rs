use crate::model::{Address, ApiCepRecord, Lookup, ViaCepRecord};
use crate::race::RaceOutcome;

pub const BANNER: &str = "Buscando endereço, aguarde...";
pub const TIMEOUT_NOTICE: &str = "timeout";

/// Multi-line block for a successful lookup, preceded by an empty line.
pub fn render_lookup(lookup: &Lookup) -> String {
    match &lookup.address {
        Address::ViaCep(rec) => render_viacep(&lookup.url, rec),
        Address::ApiCep(rec) => render_apicep(&lookup.url, rec),
    }
}

/// Text for a race outcome. Failures are reported on stderr by the caller.
pub fn render_outcome(outcome: &RaceOutcome) -> Option<String> {
    match outcome {
        RaceOutcome::Resolved(lookup) => Some(render_lookup(lookup)),
        RaceOutcome::TimedOut => Some(TIMEOUT_NOTICE.to_string()),
        RaceOutcome::Failed { .. } => None,
    }
}

fn render_viacep(url: &str, rec: &ViaCepRecord) -> String {
    format!(
        "
API: ViaCEP,
PATH: {url},
CEP: {},
Logradouro: {},
Complemento: {},
Bairro: {},
Localidade: {},
UF: {},
IBGE: {},
GIA: {},
DDD: {},
SIAFI: {}",
        rec.cep,
        rec.logradouro,
        rec.complemento,
        rec.bairro,
        rec.localidade,
        rec.uf,
        rec.ibge,
        rec.gia,
        rec.ddd,
        rec.siafi,
    )
}

fn render_apicep(url: &str, rec: &ApiCepRecord) -> String {
    format!(
        "
API: ApiCEP,
PATH: {url},
CEP: {},
Logradouro: {},
Bairro: {},
Localidade: {},
UF: {},
Status: {},
Ok: {},
StatusText: {}",
        rec.code,
        rec.address,
        rec.district,
        rec.city,
        rec.state,
        rec.status,
        rec.ok,
        rec.status_text,
    )
}
