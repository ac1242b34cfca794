//! # Built-in Deck
//!
//! "Perlas Clínicas: Pruebas Hepáticas": a quick-reference deck on liver
//! function tests for ward and on-call work. Content follows the AASLD, ACG,
//! EASL and CDC guidelines.

use crate::core::deck::{Card, Deck, DeckError};

pub const TITLE: &str = "⚕️ Perlas Clínicas: Pruebas Hepáticas";
pub const SUBTITLE: &str = "Guía práctica para guardia y sala";
pub const GUIDELINES: &str = "Basado en guías AASLD, ACG, EASL, CDC";
pub const SOURCE_NOTE: &str = "Contenido basado en guías ACG 2017, AASLD, EASL, CDC 2023-2025";

const PEARLS: &[(&str, &str)] = &[
    (
        "Patrón hepatocelular: ¿Cómo se diagnostica?",
        "ALT/AST ≫ FA → calcular R. Si R≥5 = hepatocelular. DDx: hepatitis viral, DILI, isquemia, NAFLD/MASLD. Perla: ALT más específica que AST.",
    ),
    (
        "¿Qué indica AST/ALT >2?",
        "Sugiere hepatopatía alcohólica (especialmente con GGT↑ y MCV↑). También en cirrosis avanzada. Perla: ALT puede ser normal en consumo de alcohol.",
    ),
    (
        "¿Cómo calcular el R-value y qué significa?",
        "R = (ALT/ULN) / (FA/ULN). R≥5: hepatocelular; R 2-5: mixto; R≤2: colestásico. Perla: usar ULN correctos del laboratorio.",
    ),
    (
        "Ley de Hy: ¿Qué indica y por qué es importante?",
        "ALT/AST ≥3×ULN + bilirrubina ≥2×ULN (sin FA elevada) = alto riesgo de mortalidad/insuficiencia hepática. Perla: documentar exclusión de hemólisis/obstrucción.",
    ),
    (
        "FA elevada: ¿Cómo confirmar origen hepático?",
        "Pedir GGT o 5'-NT. Si ambos normales → pensar en origen óseo. Si GGT↑ → origen hepático/colestasis. US es imagen de 1ª línea.",
    ),
    (
        "GGT: ¿Cuándo es útil y cuándo no?",
        "Útil para confirmar origen hepático de FA↑. GGT aislada es inespecífica. Perla: NO usar GGT sola para diagnosticar 'consumo de alcohol'.",
    ),
    (
        "Colestasis intra vs extrahepática: algoritmo diagnóstico",
        "FA/GGT↑ → US 1ª línea. Dilatación biliar = extrahepática (cálculos/tumor). Sin dilatación = intrahepática (PBC/PSC/DILI). Perla: no demorar imagen ante ictericia.",
    ),
    (
        "FIB-4: ¿Cómo se calcula y qué valores importan?",
        "FIB-4 = (edad×AST)/(plaquetas×√ALT). <1.3 = baja probabilidad de fibrosis (<65 años). >2.67 = sugiere fibrosis avanzada. Perla: valores intermedios requieren pruebas adicionales.",
    ),
    (
        "Transaminasas >1000: DDx principal",
        "Pensar en: 1) Isquemia hepática ('shock liver'), 2) Paracetamol, 3) Hepatitis A/B aguda, 4) DILI grave. Perla: LDH muy alta sugiere isquemia.",
    ),
    (
        "Isquemia hepática ('shock liver'): características",
        "AST/ALT >1000 + LDH muy alta en contexto de hipotensión/hipoxemia. Transaminasas caen rápido si se corrige perfusión. Perla: LDH ayuda a distinguir de viral.",
    ),
    (
        "Albúmina: ¿Qué refleja y cuándo cambiar?",
        "Refleja función de síntesis hepática crónica (vida media 20 días). Baja en cirrosis, nefrosis, desnutrición. Perla: no 'corregir' de rutina salvo indicación (ej. paracentesis).",
    ),
    (
        "MELD-Na: ¿Qué es y para qué sirve?",
        "Usa bilirrubina, INR, creatinina y sodio. Predice mortalidad a 90 días y prioriza trasplante. Mayor MELD-Na = mayor mortalidad. Perla: usar calculadoras oficiales OPTN.",
    ),
    (
        "Child-Pugh: ¿Qué evalúa?",
        "Estadifica cirrosis con: bilirrubina, albúmina, INR, ascitis, encefalopatía (clases A-C). Clase C = alto riesgo. Perla: MELD-Na preferible para trasplante.",
    ),
    (
        "DILI: ¿Cuándo hospitalizar?",
        "Si hay: ictericia, INR↑, encefalopatía, o cumple Ley de Hy (bili≥2×ULN con ALT↑). Alto riesgo de insuficiencia hepática aguda.",
    ),
    (
        "Bilirrubina directa vs indirecta: interpretación",
        "Directa↑ (>50%) = colestasis/hepatitis. Indirecta↑ (>80%) = hemólisis/Gilbert. Perla: coluria señala conjugada; acolia sugiere obstrucción.",
    ),
    (
        "Síndrome de Gilbert: características",
        "Bilirrubina indirecta↑, FA/ALT/AST normales. Gatillado por ayuno/estrés. Benigno, no requiere imagen. Perla: educar al paciente, es benigno.",
    ),
    (
        "PBC: ¿Cómo diagnosticar?",
        "FA↑ + AMA-M2 (o ANA gp210/sp100). No siempre requiere biopsia. Tratamiento: UDCA 13-15 mg/kg/día. Perla: vigilar osteoporosis y tiroides.",
    ),
    (
        "PSC: ¿Cómo diagnosticar y qué vigilar?",
        "FA↑ + MRCP con estenosis/ectasias. Asociado a EII. Sin fármaco probado efectivo. Perla: vigilancia de colangiocarcinoma; evitar UDCA altas dosis.",
    ),
    (
        "Hepatitis B: interpretación básica de serologías",
        "HBsAg+/anti-HBc IgM+ = agudo. HBsAg+ >6 meses = crónico. Anti-HBs+ solo = vacunado. Perla: usar tablas CDC actualizadas.",
    ),
    (
        "Hepatitis C: ¿Por qué pedir 'reflex RNA'?",
        "Algoritmo 2 pasos: anticuerpo + RNA automático. Confirma infección activa en una sola orden, evita pérdidas de seguimiento. >95% curable con DAA.",
    ),
    (
        "AFP: ¿Cómo usar en vigilancia de HCC?",
        "US cada 6 meses ± AFP en cirróticos. AFP aislada NO suficiente para diagnóstico. Perla: elevación puede ser por hepatitis activa, no solo HCC.",
    ),
    (
        "Amonio en encefalopatía hepática: utilidad",
        "Uso limitado. Si amonio NORMAL, reevaluar diagnóstico de EH (considerar delirium/sepsis/fármacos). EH es diagnóstico CLÍNICO. Perla: no monitorizar seriado.",
    ),
    (
        "TP/INR en hepatopatía: interpretación",
        "INR↑ sugiere falla sintética. En colestasis puede ser por déficit de vitamina K. Perla: NO 'corregir' INR de rutina en cirrosis estable sin sangrado.",
    ),
    (
        "ALT 'ULN saludable': ¿Qué valores usar?",
        "~33 U/L varones, ~25 U/L mujeres. Valores mayores ameritan evaluación. Perla: no usar 40 U/L universal sin contexto; elevaciones leves pueden ser significativas.",
    ),
    (
        "'Red flags' de laboratorio: ¿Cuándo derivar urgente?",
        "INR≥1.5, bilirrubina rápida↑, ALT>1000, plaquetas<100k, Na<130. Sugiere ALF/ACLF. Calcular MELD-Na y considerar derivación a centro de trasplante.",
    ),];

/// Builds the built-in hepatic pearls deck.
pub fn hepatic_pearls() -> Result<Deck, DeckError> {
    let cards = PEARLS
        .iter()
        .map(|(front, back)| Card::new(*front, *back))
        .collect();
    Ok(Deck::new(TITLE, cards)?
        .with_subtitle(SUBTITLE)
        .with_guidelines(GUIDELINES)
        .with_source_note(SOURCE_NOTE))
}
