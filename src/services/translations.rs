#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
    Fr,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::Ar => &AR,
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

pub struct Texts {
    pub welcome: &'static str,
    pub too_short: &'static str,
    pub total_points: &'static str,
    pub not_found: &'static str,
    pub captain: &'static str,
    pub vice: &'static str,
    pub lang_set: &'static str,
    pub transfer_header: &'static str,
    pub transfer_out: &'static str,
    pub transfer_in: &'static str,
    pub best_xi_header: &'static str,
    pub fixtures_header: &'static str,
    pub no_fixtures: &'static str,
    pub last_header: &'static str,
    pub no_history: &'static str,
    pub price_header: &'static str,
    pub rising: &'static str,
    pub falling: &'static str,
    pub subscribed: &'static str,
    pub unsubscribed: &'static str,
    pub generic_error: &'static str,
}

static AR: Texts = Texts {
    welcome: "👋 أهلاً بك في بوت تحليل FPL! أرسل /lang en أو /lang fr لتغيير اللغة.\n📌 أرسل فريقك الآن (كل اسم لاعب في سطر)\n/transfer /bestxi /fixtures /last /prices /subscribe /unsubscribe",
    too_short: "⚠️ أرسل على الأقل 11 لاعب.",
    total_points: "📊 مجموع النقاط المتوقعة:",
    not_found: "❌ غير موجود",
    captain: "⭐ الكابتن المقترح:",
    vice: "🎯 نائب الكابتن:",
    lang_set: "✅ تم تغيير اللغة إلى العربية",
    transfer_header: "🔁 اقتراحات تبديلات:",
    transfer_out: "🚫 اقتراح إخراج:",
    transfer_in: "✅ اقتراح إدخال:",
    best_xi_header: "🏆 أفضل تشكيلة للجولة القادمة:",
    fixtures_header: "📅 مباريات الجولة القادمة:",
    no_fixtures: "لا توجد مباريات قادمة.",
    last_header: "🗂️ آخر فريق أرسلته:",
    no_history: "لا يوجد فريق محفوظ بعد.",
    price_header: "💰 توقعات تغير الأسعار:",
    rising: "📈 ارتفاع:",
    falling: "📉 انخفاض:",
    subscribed: "🔔 تم الاشتراك في تنبيهات الأسعار اليومية.",
    unsubscribed: "🔕 تم إلغاء الاشتراك في تنبيهات الأسعار.",
    generic_error: "⚠️ حدث خطأ، حاول مرة أخرى لاحقاً.",
};

static EN: Texts = Texts {
    welcome: "👋 Welcome to FPL Bot! Use /lang ar or /lang fr to change language.\n📌 Please send your team (one player per line)\n/transfer /bestxi /fixtures /last /prices /subscribe /unsubscribe",
    too_short: "⚠️ Please send at least 11 players.",
    total_points: "📊 Total Expected Points:",
    not_found: "❌ Not found",
    captain: "⭐ Suggested Captain:",
    vice: "🎯 Vice Captain:",
    lang_set: "✅ Language set to English",
    transfer_header: "🔁 Transfer Suggestions:",
    transfer_out: "🚫 Suggested OUT:",
    transfer_in: "✅ Suggested IN:",
    best_xi_header: "🏆 Best XI for the next gameweek:",
    fixtures_header: "📅 Next gameweek fixtures:",
    no_fixtures: "No upcoming fixtures.",
    last_header: "🗂️ Your last submitted team:",
    no_history: "No saved team yet.",
    price_header: "💰 Price change predictions:",
    rising: "📈 Rising:",
    falling: "📉 Falling:",
    subscribed: "🔔 Subscribed to daily price alerts.",
    unsubscribed: "🔕 Unsubscribed from price alerts.",
    generic_error: "⚠️ Something went wrong, please try again later.",
};

static FR: Texts = Texts {
    welcome: "👋 Bienvenue dans le bot FPL ! Utilisez /lang ar ou /lang en pour changer de langue.\n📌 Envoyez votre équipe (un joueur par ligne)\n/transfer /bestxi /fixtures /last /prices /subscribe /unsubscribe",
    too_short: "⚠️ Envoyez au moins 11 joueurs.",
    total_points: "📊 Total des points attendus:",
    not_found: "❌ Introuvable",
    captain: "⭐ Capitaine suggéré:",
    vice: "🎯 Vice-capitaine:",
    lang_set: "✅ Langue changée en français",
    transfer_header: "🔁 Suggestions de transferts:",
    transfer_out: "🚫 Joueurs à remplacer:",
    transfer_in: "✅ Joueurs recommandés:",
    best_xi_header: "🏆 Meilleur XI de la prochaine journée:",
    fixtures_header: "📅 Matchs de la prochaine journée:",
    no_fixtures: "Aucun match à venir.",
    last_header: "🗂️ Votre dernière équipe envoyée:",
    no_history: "Aucune équipe enregistrée pour le moment.",
    price_header: "💰 Prévisions de variation des prix:",
    rising: "📈 En hausse:",
    falling: "📉 En baisse:",
    subscribed: "🔔 Abonné aux alertes de prix quotidiennes.",
    unsubscribed: "🔕 Désabonné des alertes de prix.",
    generic_error: "⚠️ Une erreur est survenue, réessayez plus tard.",
};
