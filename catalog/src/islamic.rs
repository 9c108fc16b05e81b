//! Seed tables for the Islamic companion catalog.
//!
//! The names of Allah, the adhkar and the events are loaded into the store at
//! startup; the Hijri months and tasbih presets are served straight from the
//! constants below.

use crate::models::{Adhkar, AsmaUlHusna, HijriMonth, IslamicEvent, QuranVerse, TasbihPreset};

struct NameSeed(
    u16,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

#[rustfmt::skip]
const NAMES: &[NameSeed] = &[
    NameSeed(1, "اللَّهُ", "Allah", "الله", "الاسم الجامع لجميع صفات الكمال والجلال، وهو الاسم الأعظم", &["البقرة: 255"]),
    NameSeed(2, "الرَّحْمَنُ", "Ar-Rahman", "الرحمن", "ذو الرحمة الواسعة التي وسعت كل شيء", &["الفاتحة: 3"]),
    NameSeed(3, "الرَّحِيمُ", "Ar-Raheem", "الرحيم", "ذو الرحمة الخاصة بالمؤمنين", &["الفاتحة: 3"]),
    NameSeed(4, "الْمَلِكُ", "Al-Malik", "الملك", "مالك الملك، له الملك كله", &["الحشر: 23"]),
    NameSeed(5, "الْقُدُّوسُ", "Al-Quddus", "القدوس", "المنزه عن كل عيب ونقص", &["الحشر: 23"]),
    NameSeed(6, "السَّلاَمُ", "As-Salaam", "السلام", "السالم من كل آفة والمسلم عباده", &["الحشر: 23"]),
    NameSeed(7, "الْمُؤْمِنُ", "Al-Mu'min", "المؤمن", "المصدق رسله بالمعجزات", &["الحشر: 23"]),
    NameSeed(8, "الْمُهَيْمِنُ", "Al-Muhaymin", "المهيمن", "الرقيب الحافظ لكل شيء", &["الحشر: 23"]),
    NameSeed(9, "الْعَزِيزُ", "Al-Aziz", "العزيز", "الذي لا يُغلب ولا يُقهر", &["الحشر: 23"]),
    NameSeed(10, "الْجَبَّارُ", "Al-Jabbar", "الجبار", "الذي يجبر الضعفاء ويقهر الأقوياء", &["الحشر: 23"]),
    NameSeed(11, "الْمُتَكَبِّرُ", "Al-Mutakabbir", "المتكبر", "الذي له الكبرياء في ذاته وصفاته", &["الحشر: 23"]),
    NameSeed(12, "الْخَالِقُ", "Al-Khaliq", "الخالق", "الذي أوجد الأشياء من العدم", &["الحشر: 24"]),
    NameSeed(13, "الْبَارِئُ", "Al-Bari", "البارئ", "الذي خلق الخلق بريئاً من التفاوت", &["الحشر: 24"]),
    NameSeed(14, "الْمُصَوِّرُ", "Al-Musawwir", "المصور", "الذي صور المخلوقات ورتبها", &["الحشر: 24"]),
    NameSeed(15, "الْغَفَّارُ", "Al-Ghaffar", "الغفار", "الذي يغفر الذنوب مهما كثرت", &["البقرة: 173"]),
    NameSeed(16, "الْقَهَّارُ", "Al-Qahhar", "القهار", "الذي قهر كل شيء وخضع له كل شيء", &["الرعد: 16"]),
    NameSeed(17, "الْوَهَّابُ", "Al-Wahhab", "الوهاب", "الذي يعطي الهبات والعطايا", &["آل عمران: 8"]),
    NameSeed(18, "الرَّزَّاقُ", "Ar-Razzaq", "الرزاق", "الذي يرزق جميع المخلوقات", &["الذاريات: 58"]),
    NameSeed(19, "الْفَتَّاحُ", "Al-Fattah", "الفتاح", "الذي يفتح أبواب الرحمة والرزق", &["سبأ: 26"]),
    NameSeed(20, "اَلْعَلِيْمُ", "Al-Alim", "العليم", "الذي يعلم كل شيء ظاهراً وباطناً", &["البقرة: 158"]),
    NameSeed(21, "الْقَابِضُ", "Al-Qabid", "القابض", "الذي يقبض الأرزاق والأرواح", &[]),
    NameSeed(22, "الْبَاسِطُ", "Al-Basit", "الباسط", "الذي يبسط الرزق والرحمة", &[]),
    NameSeed(23, "الْخَافِضُ", "Al-Khafid", "الخافض", "الذي يخفض المتكبرين", &[]),
    NameSeed(24, "الرَّافِعُ", "Ar-Rafi", "الرافع", "الذي يرفع المؤمنين بالطاعات", &[]),
    NameSeed(25, "الْمُعِزُّ", "Al-Muizz", "المعز", "الذي يعز من يشاء من عباده", &["آل عمران: 26"]),
    NameSeed(26, "الْمُذِلُّ", "Al-Mudhill", "المذل", "الذي يذل من يشاء من عباده", &["آل عمران: 26"]),
    NameSeed(27, "السَّمِيعُ", "As-Sami", "السميع", "الذي يسمع جميع الأصوات", &["البقرة: 127"]),
    NameSeed(28, "الْبَصِيرُ", "Al-Basir", "البصير", "الذي يرى جميع الموجودات", &["الإسراء: 1"]),
    NameSeed(29, "الْحَكَمُ", "Al-Hakam", "الحكم", "الذي يحكم بين عباده بالعدل", &["الأنعام: 114"]),
    NameSeed(30, "الْعَدْلُ", "Al-Adl", "العدل", "الذي لا يظلم أحداً", &[]),
    NameSeed(31, "اللَّطِيفُ", "Al-Latif", "اللطيف", "الذي يعلم دقائق الأمور", &["الملك: 14"]),
    NameSeed(32, "الْخَبِيرُ", "Al-Khabir", "الخبير", "الذي يعلم حقائق الأشياء", &["الملك: 14"]),
    NameSeed(33, "الْحَلِيمُ", "Al-Halim", "الحليم", "الذي لا يعجل بالعقوبة", &["البقرة: 225"]),
    NameSeed(34, "الْعَظِيمُ", "Al-Azim", "العظيم", "الذي له العظمة في كل شيء", &["البقرة: 255"]),
    NameSeed(35, "الْغَفُورُ", "Al-Ghafur", "الغفور", "الذي يغفر الذنوب ويستر العيوب", &["البقرة: 173"]),
    NameSeed(36, "الشَّكُورُ", "Ash-Shakur", "الشكور", "الذي يجازي على اليسير من الطاعة", &["فاطر: 30"]),
    NameSeed(37, "الْعَلِيُّ", "Al-Ali", "العلي", "الذي علا فوق كل شيء", &["البقرة: 255"]),
    NameSeed(38, "الْكَبِيرُ", "Al-Kabir", "الكبير", "الذي هو أكبر من كل شيء", &["الحج: 62"]),
    NameSeed(39, "الْحَفِيظُ", "Al-Hafiz", "الحفيظ", "الذي يحفظ أولياءه من المعاصي", &["هود: 57"]),
    NameSeed(40, "الْمُقيِتُ", "Al-Muqit", "المقيت", "الذي يعطي أقوات الخلائق", &["النساء: 85"]),
    NameSeed(41, "الْحسِيبُ", "Al-Hasib", "الحسيب", "الذي يحاسب العباد", &["النساء: 6"]),
    NameSeed(42, "الْجَلِيلُ", "Al-Jalil", "الجليل", "الذي له صفة الجلال والعظمة", &["الرحمن: 27"]),
    NameSeed(43, "الْكَرِيمُ", "Al-Karim", "الكريم", "الذي لا ينفد عطاؤه", &["العلق: 3"]),
    NameSeed(44, "الرَّقِيبُ", "Ar-Raqib", "الرقيب", "الذي يراقب أحوال العباد", &["المائدة: 117"]),
    NameSeed(45, "الْمُجِيبُ", "Al-Mujib", "المجيب", "الذي يجيب دعاء من دعاه", &["هود: 61"]),
    NameSeed(46, "الْوَاسِعُ", "Al-Wasi", "الواسع", "الذي وسع كل شيء رحمة وعلماً", &["البقرة: 247"]),
    NameSeed(47, "الْحَكِيمُ", "Al-Hakim", "الحكيم", "الذي يضع الأشياء في مواضعها", &["البقرة: 32"]),
    NameSeed(48, "الْوَدُودُ", "Al-Wadud", "الودود", "الذي يحب أولياءه ويحبونه", &["البروج: 14"]),
    NameSeed(49, "الْمَجِيدُ", "Al-Majid", "المجيد", "الذي له المجد والشرف التام", &["البروج: 15"]),
    NameSeed(50, "الْبَاعِثُ", "Al-Ba'ith", "الباعث", "الذي يبعث الموتى يوم القيامة", &["الحج: 7"]),
    NameSeed(51, "الشَّهِيدُ", "Ash-Shahid", "الشهيد", "الذي لا يغيب عنه شيء", &["المائدة: 117"]),
    NameSeed(52, "الْحَقُّ", "Al-Haqq", "الحق", "الذي هو الثابت الذي لا شك فيه", &["الحج: 6"]),
    NameSeed(53, "الْوَكِيلُ", "Al-Wakil", "الوكيل", "الذي توكل إليه الأمور", &["آل عمران: 173"]),
    NameSeed(54, "الْقَوِيُّ", "Al-Qawi", "القوي", "الذي له القوة الكاملة", &["الحج: 40"]),
    NameSeed(55, "الْمَتِينُ", "Al-Matin", "المتين", "الذي له القوة المحكمة الثابتة", &["الذاريات: 58"]),
    NameSeed(56, "الْوَلِيُّ", "Al-Wali", "الولي", "الذي يتولى أمور خلقه", &["البقرة: 257"]),
    NameSeed(57, "الْحَمِيدُ", "Al-Hamid", "الحميد", "الذي استحق الحمد بفعاله", &["البقرة: 267"]),
    NameSeed(58, "الْمُحْصِي", "Al-Muhsi", "المحصي", "الذي أحصى كل شيء عدداً", &["الجن: 28"]),
    NameSeed(59, "الْمُبْدِئُ", "Al-Mubdi", "المبدئ", "الذي بدأ خلق كل شيء", &["يونس: 34"]),
    NameSeed(60, "الْمُعِيدُ", "Al-Muid", "المعيد", "الذي يعيد الخلق بعد الموت", &["يونس: 34"]),
    NameSeed(61, "الْمُحْيِي", "Al-Muhyi", "المحيي", "الذي يحيي الموتى", &["البقرة: 258"]),
    NameSeed(62, "اَلْمُمِيتُ", "Al-Mumit", "المميت", "الذي يميت الأحياء", &["البقرة: 258"]),
    NameSeed(63, "الْحَيُّ", "Al-Hayy", "الحي", "الذي له الحياة الكاملة", &["البقرة: 255"]),
    NameSeed(64, "الْقَيُّومُ", "Al-Qayyum", "القيوم", "القائم بتدبير خلقه", &["البقرة: 255"]),
    NameSeed(65, "الْوَاجِدُ", "Al-Wajid", "الواجد", "الذي لا يعوزه شيء", &[]),
    NameSeed(66, "الْمَاجِدُ", "Al-Majid", "الماجد", "الذي له المجد الأعظم", &[]),
    NameSeed(67, "الْواحِدُ", "Al-Wahid", "الواحد", "الذي لا شريك له", &["الرعد: 16"]),
    NameSeed(68, "اَلاَحَدُ", "Al-Ahad", "الأحد", "الذي لا يقبل التجزئة", &["الإخلاص: 1"]),
    NameSeed(69, "الصَّمَدُ", "As-Samad", "الصمد", "الذي يُقصد في الحوائج", &["الإخلاص: 2"]),
    NameSeed(70, "الْقَادِرُ", "Al-Qadir", "القادر", "الذي له القدرة على كل شيء", &["الأنعام: 65"]),
    NameSeed(71, "الْمُقْتَدِرُ", "Al-Muqtadir", "المقتدر", "الذي له كمال القدرة", &["الكهف: 45"]),
    NameSeed(72, "الْمُقَدِّمُ", "Al-Muqaddim", "المقدم", "الذي يقدم من يشاء", &[]),
    NameSeed(73, "الْمُؤَخِّرُ", "Al-Mu'akhkhir", "المؤخر", "الذي يؤخر من يشاء", &[]),
    NameSeed(74, "الأوَّلُ", "Al-Awwal", "الأول", "الذي ليس قبله شيء", &["الحديد: 3"]),
    NameSeed(75, "الآخِرُ", "Al-Akhir", "الآخر", "الذي ليس بعده شيء", &["الحديد: 3"]),
    NameSeed(76, "الظَّاهِرُ", "Az-Zahir", "الظاهر", "الذي ظهر فوق كل شيء", &["الحديد: 3"]),
    NameSeed(77, "الْبَاطِنُ", "Al-Batin", "الباطن", "الذي هو أقرب إلينا من حبل الوريد", &["الحديد: 3"]),
    NameSeed(78, "الْوَالِي", "Al-Wali", "الوالي", "المالك للأشياء المتصرف فيها", &[]),
    NameSeed(79, "الْمُتَعَالِي", "Al-Muta'ali", "المتعالي", "الذي جل عن إفك المفترين", &["الرعد: 9"]),
    NameSeed(80, "الْبَرُّ", "Al-Barr", "البر", "الذي يُحسن إلى خلقه", &["الطور: 28"]),
    NameSeed(81, "التَّوَابُ", "At-Tawwab", "التواب", "الذي يتوب على من تاب", &["البقرة: 37"]),
    NameSeed(82, "الْمُنْتَقِمُ", "Al-Muntaqim", "المنتقم", "الذي ينتقم من أعدائه", &["المائدة: 95"]),
    NameSeed(83, "العَفُوُّ", "Al-Afuww", "العفو", "الذي يعفو عن السيئات", &["النساء: 99"]),
    NameSeed(84, "الرَّؤُوفُ", "Ar-Ra'uf", "الرؤوف", "الذي رأفته أبلغ من الرحمة", &["البقرة: 143"]),
    NameSeed(85, "مَالِكُ الْمُلْكِ", "Malik-ul-Mulk", "مالك الملك", "الذي يملك الملك وينزعه ممن يشاء", &["آل عمران: 26"]),
    NameSeed(86, "ذُوالْجَلاَلِ وَالإكْرَامِ", "Dhul-Jalali-wal-Ikram", "ذو الجلال والإكرام", "الذي له الجلال والإكرام", &["الرحمن: 27"]),
    NameSeed(87, "الْمُقْسِطُ", "Al-Muqsit", "المقسط", "الذي يقسط في حكمه فلا يظلم", &["المائدة: 42"]),
    NameSeed(88, "الْجَامِعُ", "Al-Jami", "الجامع", "الذي يجمع الخلائق ليوم القيامة", &["آل عمران: 9"]),
    NameSeed(89, "الْغَنِيُّ", "Al-Ghani", "الغني", "الذي لا يحتاج إلى أحد", &["آل عمران: 97"]),
    NameSeed(90, "الْمُغْنِي", "Al-Mughni", "المغني", "الذي يغني من يشاء من خلقه", &["النجم: 48"]),
    NameSeed(91, "الْمَانِعُ", "Al-Mani", "المانع", "الذي يمنع من أراد إهلاكه", &[]),
    NameSeed(92, "الضَّارَّ", "Ad-Darr", "الضار", "الذي يقدر على الإضرار بمن أراد", &[]),
    NameSeed(93, "النَّافِعُ", "An-Nafi", "النافع", "الذي ينفع من يشاء", &[]),
    NameSeed(94, "النُّورُ", "An-Nur", "النور", "الذي نور السماوات والأرض", &["النور: 35"]),
    NameSeed(95, "الْهَادِي", "Al-Hadi", "الهادي", "الذي يهدي من يشاء لدينه", &["الحج: 54"]),
    NameSeed(96, "الْبَدِيعُ", "Al-Badi", "البديع", "الذي خلق الخلق لا على مثال", &["البقرة: 117"]),
    NameSeed(97, "الْبَاقِي", "Al-Baqi", "الباقي", "الذي يبقى ولا يفنى", &["الرحمن: 27"]),
    NameSeed(98, "الْوَارِثُ", "Al-Warith", "الوارث", "الذي يرث الأرض ومن عليها", &["الحجر: 23"]),
    NameSeed(99, "الرَّشِيدُ", "Ar-Rashid", "الرشيد", "الذي أرشد الخلق إلى مصالحهم", &[]),
];

/// The 99 names, keyed by `order` 1..=99. Names without a Quranic reference
/// carry `None` rather than an empty list.
pub fn asma_ul_husna() -> Vec<AsmaUlHusna> {
    NAMES
        .iter()
        .map(|NameSeed(order, arabic, latin, meaning, explanation, references)| AsmaUlHusna {
            id: i64::from(*order),
            order: *order,
            arabic_name: arabic.to_string(),
            transliteration: latin.to_string(),
            meaning: meaning.to_string(),
            explanation: explanation.to_string(),
            benefits: None,
            quranic_references: (!references.is_empty())
                .then(|| references.iter().map(|r| r.to_string()).collect()),
        })
        .collect()
}

struct DhikrSeed {
    category: &'static str,
    arabic_text: &'static str,
    transliteration: &'static str,
    translation: &'static str,
    source: &'static str,
    repetitions: u32,
    benefits: &'static str,
    tags: &'static [&'static str],
}

#[rustfmt::skip]
const ADHKAR: &[DhikrSeed] = &[
    DhikrSeed {
        category: "morning",
        arabic_text: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        transliteration: "Asbahna wa asbahal mulku lillah, walhamdu lillah, la ilaha illa Allah wahdahu la sharika lah, lahul mulku wa lahul hamdu wa huwa ala kulli shayin qadeer",
        translation: "أصبحنا وأصبح الملك لله، والحمد لله، لا إله إلا الله وحده لا شريك له، له الملك وله الحمد وهو على كل شيء قدير",
        source: "أبو داود",
        repetitions: 1,
        benefits: "حفظ من الشياطين والمصائب",
        tags: &["صباح", "حفظ", "ذكر"],
    },
    DhikrSeed {
        category: "morning",
        arabic_text: "اللَّهُمَّ بِكَ أَصْبَحْنَا وَبِكَ أَمْسَيْنَا وَبِكَ نَحْيَا وَبِكَ نَمُوتُ وَإِلَيْكَ النُّشُورُ",
        transliteration: "Allahumma bika asbahna wa bika amsayna wa bika nahya wa bika namutu wa ilaykan nushur",
        translation: "اللهم بك أصبحنا وبك أمسينا وبك نحيا وبك نموت وإليك النشور",
        source: "الترمذي",
        repetitions: 1,
        benefits: "تفويض الأمر إلى الله والتوكل عليه",
        tags: &["صباح", "توكل", "دعاء"],
    },
    DhikrSeed {
        category: "evening",
        arabic_text: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        transliteration: "Amsayna wa amsal mulku lillah, walhamdu lillah, la ilaha illa Allah wahdahu la sharika lah, lahul mulku wa lahul hamdu wa huwa ala kulli shayin qadeer",
        translation: "أمسينا وأمسى الملك لله، والحمد لله، لا إله إلا الله وحده لا شريك له، له الملك وله الحمد وهو على كل شيء قدير",
        source: "أبو داود",
        repetitions: 1,
        benefits: "حفظ من الشياطين والمصائب",
        tags: &["مساء", "حفظ", "ذكر"],
    },
    DhikrSeed {
        category: "general",
        arabic_text: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ",
        transliteration: "Subhan Allah wa bihamdih",
        translation: "سبحان الله وبحمده",
        source: "صحيح البخاري",
        repetitions: 100,
        benefits: "من قالها في يوم مائة مرة حُطت خطاياه وإن كانت مثل زبد البحر",
        tags: &["تسبيح", "حمد", "عام"],
    },
    DhikrSeed {
        category: "after_prayer",
        arabic_text: "سُبْحَانَ اللَّهِ",
        transliteration: "Subhan Allah",
        translation: "سبحان الله",
        source: "البخاري ومسلم",
        repetitions: 33,
        benefits: "تسبيح الله وتنزيهه عن النقص",
        tags: &["تسبيح", "بعد_الصلاة"],
    },
    DhikrSeed {
        category: "after_prayer",
        arabic_text: "الْحَمْدُ لِلَّهِ",
        transliteration: "Alhamdu lillah",
        translation: "الحمد لله",
        source: "البخاري ومسلم",
        repetitions: 33,
        benefits: "حمد الله وشكره على نعمه",
        tags: &["حمد", "بعد_الصلاة"],
    },
    DhikrSeed {
        category: "after_prayer",
        arabic_text: "اللَّهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        translation: "الله أكبر",
        source: "البخاري ومسلم",
        repetitions: 34,
        benefits: "تكبير الله وإعلان عظمته",
        tags: &["تكبير", "بعد_الصلاة"],
    },
    DhikrSeed {
        category: "after_prayer",
        arabic_text: "لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        transliteration: "La ilaha illa Allah wahdahu la sharika lah, lahul-mulku wa lahul-hamd, wa huwa 'ala kulli shay'in qadir",
        translation: "لا إله إلا الله وحده لا شريك له، له الملك وله الحمد وهو على كل شيء قدير",
        source: "صحيح البخاري",
        repetitions: 10,
        benefits: "من قالها عشر مرات بعد المغرب كانت له بكل واحدة عشر حسنات",
        tags: &["بعد الصلاة", "توحيد", "تهليل"],
    },
];

/// Daily remembrances, ids in table order.
pub fn adhkar() -> Vec<Adhkar> {
    ADHKAR
        .iter()
        .zip(1..)
        .map(|(seed, id)| Adhkar {
            id,
            arabic_text: seed.arabic_text.to_string(),
            transliteration: seed.transliteration.to_string(),
            translation: seed.translation.to_string(),
            category: seed.category.to_string(),
            source: seed.source.to_string(),
            repetitions: seed.repetitions,
            benefits: Some(seed.benefits.to_string()),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

// (title, arabic title, category, hijri date, description, significance)
#[rustfmt::skip]
const EVENTS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("ليلة القدر", "لَيْلَةُ الْقَدْرِ", "رمضان", "27 رمضان", "ليلة خير من ألف شهر، نزل فيها القرآن الكريم", "ليلة عظيمة يستجاب فيها الدعاء وتتضاعف الحسنات"),
    ("عيد الفطر", "عِيدُ الْفِطْرِ", "عيد", "1 شوال", "عيد الفطر المبارك بعد انتهاء شهر رمضان", "يوم فرح وسرور للمسلمين بعد إتمام صيام رمضان"),
    ("يوم عرفة", "يَوْمُ عَرَفَةَ", "حج", "9 ذو الحجة", "يوم الحج الأكبر ويوم إكمال الدين", "صيامه يكفر السنة الماضية والباقية"),
    ("عيد الأضحى", "عِيدُ الْأَضْحَى", "عيد", "10 ذو الحجة", "عيد الأضحى المبارك في موسم الحج", "يوم النحر والتضحية في سبيل الله تعالى"),
    ("المولد النبوي", "الْمَوْلِدُ النَّبَوِيُّ", "سيرة", "12 ربيع الأول", "ذكرى مولد الرسول محمد صلى الله عليه وسلم", "مناسبة لتذكر سيرة النبي صلى الله عليه وسلم"),
    ("ليلة الإسراء والمعراج", "لَيْلَةُ الْإِسْرَاءِ وَالْمِعْرَاجِ", "سيرة", "27 رجب", "ليلة رحلة الرسول صلى الله عليه وسلم من المسجد الحرام إلى المسجد الأقصى", "فرضت فيها الصلوات الخمس"),
    ("ليلة النصف من شعبان", "لَيْلَةُ النِّصْفِ مِنْ شَعْبَانَ", "مناسبة", "15 شعبان", "ليلة مباركة يستحب فيها القيام والدعاء", "ليلة يغفر الله فيها لعباده"),
    ("يوم عاشوراء", "يَوْمُ عَاشُورَاءَ", "صيام", "10 محرم", "يوم صيام مستحب، نجى الله فيه موسى عليه السلام", "صيامه يكفر السنة الماضية"),
];

/// Recurring events of the Hijri year, ids in table order.
pub fn islamic_events() -> Vec<IslamicEvent> {
    EVENTS
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            let &(title, title_arabic, category, hijri_date, description, significance) = seed;
            IslamicEvent {
                id,
                title: title.to_string(),
                title_arabic: title_arabic.to_string(),
                description: description.to_string(),
                hijri_date: hijri_date.to_string(),
                gregorian_date: None,
                category: category.to_string(),
                significance: significance.to_string(),
                is_recurring: true,
            }
        })
        .collect()
}

// (surah, surah name, verse, arabic text, translation)
#[rustfmt::skip]
const VERSES: &[(u16, &str, u16, &str, &str)] = &[
    (1, "الفاتحة", 1, "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "In the name of Allah, the Entirely Merciful, the Especially Merciful."),
    (1, "الفاتحة", 2, "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ", "All praise is due to Allah, Lord of the worlds."),
    (1, "الفاتحة", 3, "الرَّحْمَٰنِ الرَّحِيمِ", "The Entirely Merciful, the Especially Merciful."),
    (1, "الفاتحة", 4, "مَالِكِ يَوْمِ الدِّينِ", "Sovereign of the Day of Recompense."),
    (1, "الفاتحة", 5, "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ", "It is You we worship and You we ask for help."),
    (1, "الفاتحة", 6, "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ", "Guide us to the straight path."),
    (1, "الفاتحة", 7, "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ", "The path of those upon whom You have bestowed favor, not of those who have evoked anger or of those who are astray."),
    (112, "الإخلاص", 1, "قُلْ هُوَ اللَّهُ أَحَدٌ", "Say, He is Allah, who is One."),
    (112, "الإخلاص", 2, "اللَّهُ الصَّمَدُ", "Allah, the Eternal Refuge."),
    (112, "الإخلاص", 3, "لَمْ يَلِدْ وَلَمْ يُولَدْ", "He neither begets nor is born."),
    (112, "الإخلاص", 4, "وَلَمْ يَكُن لَّهُ كُفُوًا أَحَدٌ", "Nor is there to Him any equivalent."),
];

/// A small verse table: Al-Fatiha and Al-Ikhlas.
pub fn quran_verses() -> Vec<QuranVerse> {
    VERSES
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            let &(surah_number, surah_name, verse_number, arabic_text, translation) = seed;
            QuranVerse {
                id,
                surah_number,
                surah_name: surah_name.to_string(),
                verse_number,
                arabic_text: arabic_text.to_string(),
                translation: translation.to_string(),
            }
        })
        .collect()
}

#[rustfmt::skip]
pub const HIJRI_MONTHS: [HijriMonth; 12] = [
    HijriMonth { number: 1, name: "محرم", transliteration: "Muharram", days: 30, description: "شهر حرام، يستحب فيه الصيام" },
    HijriMonth { number: 2, name: "صفر", transliteration: "Safar", days: 29, description: "شهر من الأشهر الحرم" },
    HijriMonth { number: 3, name: "ربيع الأول", transliteration: "Rabi al-Awwal", days: 30, description: "شهر مولد النبي صلى الله عليه وسلم" },
    HijriMonth { number: 4, name: "ربيع الآخر", transliteration: "Rabi al-Akhir", days: 29, description: "الشهر الربيعي الثاني" },
    HijriMonth { number: 5, name: "جمادى الأولى", transliteration: "Jumada al-Ula", days: 30, description: "بداية فصل الجماد" },
    HijriMonth { number: 6, name: "جمادى الآخرة", transliteration: "Jumada al-Akhirah", days: 29, description: "نهاية فصل الجماد" },
    HijriMonth { number: 7, name: "رجب", transliteration: "Rajab", days: 30, description: "شهر حرام، يستحب فيه العمرة" },
    HijriMonth { number: 8, name: "شعبان", transliteration: "Sha'ban", days: 29, description: "شهر التحضير لرمضان" },
    HijriMonth { number: 9, name: "رمضان", transliteration: "Ramadan", days: 30, description: "شهر الصيام والقرآن" },
    HijriMonth { number: 10, name: "شوال", transliteration: "Shawwal", days: 29, description: "شهر عيد الفطر" },
    HijriMonth { number: 11, name: "ذو القعدة", transliteration: "Dhu al-Qa'dah", days: 30, description: "شهر حرام، بداية موسم الحج" },
    HijriMonth { number: 12, name: "ذو الحجة", transliteration: "Dhu al-Hijjah", days: 29, description: "شهر الحج وعيد الأضحى" },
];

#[rustfmt::skip]
pub const TASBIH_PRESETS: [TasbihPreset; 6] = [
    TasbihPreset { text: "سُبْحَانَ اللَّهِ", translation: "سبحان الله", target: 33 },
    TasbihPreset { text: "الْحَمْدُ لِلَّهِ", translation: "الحمد لله", target: 33 },
    TasbihPreset { text: "اللَّهُ أَكْبَرُ", translation: "الله أكبر", target: 34 },
    TasbihPreset { text: "لَا إِلَهَ إِلَّا اللَّهُ", translation: "لا إله إلا الله", target: 100 },
    TasbihPreset { text: "أَسْتَغْفِرُ اللَّهَ", translation: "أستغفر الله", target: 100 },
    TasbihPreset { text: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ", translation: "سبحان الله وبحمده", target: 100 },
];
