//! Shared model fixture: a handful of hand-picked trigram lists, enough to
//! tell the fixture languages apart on full sentences.

use langid_core::{Detector, LanguageModelStore, PackedModels};

pub const MODELS_JSON: &str = r#"{
    "Latn": {
        "eng": " th|the|he |nd | an|and|ing| in|ng | of|of |ion| to|to |ed |is | is|at |er |re |tio|on |ent|hat|tha| wh|es |in |ly | ca",
        "spa": " de|de |os | la|la |el | el|es | co|ión|ent| en|en |as |ado|ien|ar | qu|que|ue | pa|ón |nte|on | lo|con|er |aci|s d",
        "fra": " de|es |de | le|ent|le |nt |la | la| et|et |les| pa|ion|re |on |que| qu|ue | co|des|s d|e l|e d| da|dan|ans|ns |t d",
        "deu": "en |er | de|der|ie | di|die|ich|ch |ein| un|und|nd |sch|in | ei|den|che| da|gen|ine|te |cht|ten| ge|es |ung| be|n d"
    },
    "Cyrl": {
        "rus": " пр| на|ния|ени|ого| по|ост|ств|ие | и |ть | ко|ли |на |ани|ать|ой | не|ных|при|ва |про|ов |во |ия |ый | ра|ово| об| в ",
        "ukr": " пр|на | на|ння|ого| по| і |ти |ня |ть | за|ува|ні |ів | ко|ати| не|при|ьно|ост|про|их |від| ві|ий |ли |ми "
    }
}"#;

pub const ENGLISH: &str =
    "The quick brown fox jumps over the lazy dog and the cat is sleeping in the house";
pub const SPANISH: &str = "El perro de la casa es el mejor amigo de los niños y de la familia";
pub const FRENCH: &str =
    "Le chat est sur la table et les enfants jouent dans le jardin de la maison";
pub const GERMAN: &str = "Der Hund und die Katze schlafen in dem Haus, weil es draußen regnet";
pub const RUSSIAN: &str =
    "Собака является лучшим другом человека и охраняет дом от незваных гостей";
pub const UKRAINIAN: &str = "Привіт, як справи? Я дуже радий тебе бачити на нашій зустрічі";

pub fn store() -> LanguageModelStore {
    let packed: PackedModels = serde_json::from_str(MODELS_JSON).unwrap();
    LanguageModelStore::from_packed(&packed).unwrap()
}

#[allow(dead_code)]
pub fn detector() -> Detector {
    Detector::new(store())
}
