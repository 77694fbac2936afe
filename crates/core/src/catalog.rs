//! The studio's default room catalog.
//!
//! Seeded for a new architect on request so the wizard has something to
//! offer before the questionnaire is customised.

/// A default category and its rooms, in display order.
pub struct CatalogCategory {
    pub name: &'static str,
    pub rooms: &'static [&'static str],
}

/// A starter question attached to a default room.
pub struct CatalogQuestion {
    pub room: &'static str,
    pub text: &'static str,
    pub question_type: &'static str,
    pub options: &'static [&'static str],
    pub required: bool,
}

pub const DEFAULT_CATALOG: &[CatalogCategory] = &[
    CatalogCategory {
        name: "Espaces de vie",
        rooms: &[
            "Entrée / hall",
            "Salon",
            "Séjour",
            "Salle à manger",
            "Cuisine ouverte",
            "Cuisine fermée",
            "Coin repas",
            "Véranda / jardin d'hiver",
            "Pièce de réception",
            "Salle de jeux / salle TV",
            "Bibliothèque",
            "Home cinéma",
        ],
    },
    CatalogCategory {
        name: "Espaces nuit",
        rooms: &[
            "Chambre principale",
            "Suite parentale (avec salle d'eau / dressing)",
            "Chambre d'amis",
            "Chambre d'enfant",
            "Chambre d'adolescent",
            "Dortoir (gîte / maison secondaire)",
            "Mezzanine / coin nuit",
        ],
    },
    CatalogCategory {
        name: "Espaces d'eau",
        rooms: &[
            "Salle de bains principale",
            "Salle d'eau",
            "Douche d'appoint",
            "WC indépendant",
            "Buanderie / lingerie",
            "Espace bien-être (sauna, hammam, jacuzzi)",
        ],
    },
    CatalogCategory {
        name: "Espaces de travail / techniques",
        rooms: &[
            "Bureau principal",
            "Bureau d'appoint",
            "Atelier (créatif, bricolage, peinture…)",
            "Studio musique / son / vidéo",
            "Salle informatique / gaming room",
            "Local technique (chaufferie, PAC, ballon, etc.)",
        ],
    },
    CatalogCategory {
        name: "Espaces de stockage et annexes",
        rooms: &[
            "Cellier / garde-manger",
            "Arrière-cuisine",
            "Cave à vin",
            "Cave alimentaire",
            "Grenier / combles",
            "Dressing indépendant",
            "Placards sous escalier",
            "Réserve / débarras",
            "Local jardin / abri",
        ],
    },
    CatalogCategory {
        name: "Espaces extérieurs",
        rooms: &[
            "Terrasse",
            "Balcon",
            "Patio / cour intérieure",
            "Jardin",
            "Cuisine d'extérieur",
            "Abri de jardin",
            "Piscine",
            "Pool house",
            "Spa extérieur",
            "Carport",
            "Garage",
            "Abri à vélos / local technique extérieur",
        ],
    },
    CatalogCategory {
        name: "Espaces spécifiques",
        rooms: &[
            "Studio indépendant (location, ado, télétravail)",
            "Chambre d'hôtes / gîte",
            "Atelier professionnel / boutique",
            "Salle de sport / fitness",
            "Salle de danse / yoga",
            "Salle de musique",
            "Salle de réception / banquet",
            "Galerie d'art / exposition",
            "Orangerie / serre",
            "Chapelle / espace spirituel",
            "Chambre de service",
            "Logement du personnel",
        ],
    },
];

pub const DEFAULT_QUESTIONS: &[CatalogQuestion] = &[
    CatalogQuestion {
        room: "Salon",
        text: "Quelle ambiance souhaitez-vous pour votre salon ?",
        question_type: "select",
        options: &[
            "Cosy et chaleureux",
            "Moderne et épuré",
            "Classique et élégant",
            "Industriel",
            "Scandinave",
        ],
        required: true,
    },
    CatalogQuestion {
        room: "Salon",
        text: "Combien de personnes doivent pouvoir s'asseoir confortablement ?",
        question_type: "number",
        options: &[],
        required: false,
    },
    CatalogQuestion {
        room: "Salon",
        text: "Fonctions principales du salon",
        question_type: "multiselect",
        options: &[
            "Détente",
            "Réception d'invités",
            "Lecture",
            "Regarder la TV",
            "Jeux en famille",
        ],
        required: true,
    },
    CatalogQuestion {
        room: "Cuisine ouverte",
        text: "Quel type d'aménagement préférez-vous ?",
        question_type: "select",
        options: &["Linéaire", "En L", "En U", "Avec îlot central", "En parallèle"],
        required: true,
    },
    CatalogQuestion {
        room: "Cuisine ouverte",
        text: "Style de cuisine souhaité",
        question_type: "select",
        options: &[
            "Moderne",
            "Traditionnelle",
            "Campagnarde",
            "Industrielle",
            "Contemporaine",
        ],
        required: true,
    },
    CatalogQuestion {
        room: "Chambre principale",
        text: "Ambiance recherchée",
        question_type: "select",
        options: &[
            "Zen et apaisante",
            "Lumineuse",
            "Cocooning",
            "Minimaliste",
            "Romantique",
        ],
        required: true,
    },
];
