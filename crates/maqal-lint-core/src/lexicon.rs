//! Lexicon tables for the analysis pipeline.
//!
//! A [`Lexicon`] bundles the term sets and boilerplate templates the
//! classifiers scan against. The built-in tables target Arabic
//! restaurant-guide prose; callers can inject custom tables via
//! [`Lexicon::new`] (useful for tests and for porting the engine to
//! another editorial domain).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{LexiconError, LexiconResult};

/// Arabic function words excluded from n-gram repetition analysis.
const STOPWORDS: &str = "\
في من على إلى عن مع حتى ثم أو أم بل لا لن لم إن أن كان تكون يكون قد قدّ هل ما \
ليس ليسوا التي الذي الذين هذا هذه ذلك تلك هناك هنا جدا فقط دون حسب عبر لدى حيث \
كما كذلك بين ضمن وراء أمام قبل بعد منذ طوال خلال ضد عند نحو سوى غير مثل مثلما \
لأن إذ إذا لكن لكي كي إلا بما أنَّ أنّ إنَّ إنما بينما عندما حين إذن إذًا إذْ \
ربما تقريبًا غالبًا نوعًا";

/// Sensory-descriptive vocabulary (texture, aroma, temperature, doneness).
const SENSORY_TERMS: &str = "\
قوام رائحة نكهة طازج طزاجة حار سخن بارد دسم مقرمش طري متماسك حلو مالح حامض \
متوازن مدخن محمّر مشوي مطبوخ مطهّي ناعم خشن زبدة زبدي كريمي سائل كثيف عطري عبق \
عطر غني خفيف صلب طراوة";

/// Positive-sentiment vocabulary.
const POSITIVE_TERMS: &str = "\
لذيذ ممتاز رائع متقن متوازن جميل مميز مدهش نظيف سريع لطيف ودود محترف هادئ مريح \
سلس مثالي طيب فخم";

/// Negative-sentiment vocabulary.
const NEGATIVE_TERMS: &str = "\
سيئ ضعيف بارد قاسٍ جاف مزعج مزدحم بطيء متأخر فوضوي مرّ مالح حامض مبالغ مرتفع \
ثقيل زيتي ناقص";

/// Absolute/overclaiming words (always, never, the best, ...).
const ABSOLUTE_TERMS: &str = "دائمًا أبدًا كلّ جميع حتمًا مؤكد الأفضل";

/// Clichéd sentence templates matched against raw text.
const BOILERPLATE_TEMPLATES: &[&str] = &[
    r"من\s+أجمل\s+.*مطاعم",
    r"لا\s+تفوت\s+.*تجربة",
    r"يقدم\s+.*قائمة\s+متنوعة\s+.*",
    r"الخيار\s+الأفضل\s+.*",
    r"يعتبر\s+.*من\s+أفضل\s+الخيارات",
    r"يتميز\s+.*بالجودة\s+العالية",
    r"أسعار\s+مناسبة\s+.*لجميع",
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new(
        split_terms(STOPWORDS),
        split_terms(SENSORY_TERMS),
        split_terms(POSITIVE_TERMS),
        split_terms(NEGATIVE_TERMS),
        split_terms(ABSOLUTE_TERMS),
        BOILERPLATE_TEMPLATES.iter().map(|t| (*t).to_string()),
    )
    .expect("built-in boilerplate templates are valid")
});

fn split_terms(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split_whitespace().map(str::to_string)
}

/// A compiled boilerplate phrase template.
#[derive(Debug, Clone)]
pub struct BoilerplateTemplate {
    /// The template source string, echoed in report flags.
    pub raw: String,
    regex: Regex,
}

impl BoilerplateTemplate {
    fn compile(template: String) -> LexiconResult<Self> {
        let regex = RegexBuilder::new(&template)
            .case_insensitive(true)
            .build()
            .map_err(|source| LexiconError::InvalidTemplate {
                template: template.clone(),
                source,
            })?;
        Ok(Self {
            raw: template,
            regex,
        })
    }

    /// The compiled pattern for scanning raw text.
    pub(crate) const fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Immutable term tables shared read-only by all classifiers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Function words dropped before n-gram repetition counting.
    pub stopwords: HashSet<String>,
    /// Sensory-descriptive terms.
    pub sensory: HashSet<String>,
    /// Positive-sentiment terms.
    pub positive: HashSet<String>,
    /// Negative-sentiment terms.
    pub negative: HashSet<String>,
    /// Absolute/overclaiming terms.
    pub absolutes: HashSet<String>,
    /// Compiled boilerplate phrase templates.
    pub boilerplate: Vec<BoilerplateTemplate>,
}

impl Lexicon {
    /// Build a lexicon from custom term sets and boilerplate templates.
    ///
    /// Templates are compiled case-insensitively; an invalid template is
    /// the only failure mode.
    pub fn new<S, B>(
        stopwords: S,
        sensory: S,
        positive: S,
        negative: S,
        absolutes: S,
        boilerplate: B,
    ) -> LexiconResult<Self>
    where
        S: IntoIterator<Item = String>,
        B: IntoIterator<Item = String>,
    {
        Ok(Self {
            stopwords: stopwords.into_iter().collect(),
            sensory: sensory.into_iter().collect(),
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
            absolutes: absolutes.into_iter().collect(),
            boilerplate: boilerplate
                .into_iter()
                .map(BoilerplateTemplate::compile)
                .collect::<LexiconResult<_>>()?,
        })
    }

    /// The built-in Arabic restaurant-guide lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_populated() {
        let lex = Lexicon::builtin();
        assert!(lex.stopwords.contains("في"));
        assert!(lex.sensory.contains("مقرمش"));
        assert!(lex.positive.contains("لذيذ"));
        assert!(lex.negative.contains("سيئ"));
        assert!(lex.absolutes.contains("دائمًا"));
        assert_eq!(lex.boilerplate.len(), 7);
    }

    #[test]
    fn templates_match_case_insensitively() {
        let lex = Lexicon::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![r"hidden\s+gem".to_string()],
        )
        .unwrap();
        assert!(lex.boilerplate[0].regex().is_match("a Hidden GEM downtown"));
    }

    #[test]
    fn invalid_template_is_rejected() {
        let result = Lexicon::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec!["(unclosed".to_string()],
        );
        assert!(matches!(
            result,
            Err(LexiconError::InvalidTemplate { .. })
        ));
    }
}
