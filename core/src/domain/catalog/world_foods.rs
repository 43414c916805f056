/// Food names used both as scrape targets and as the match vocabulary for
/// label reconciliation. Entries are not unique; iteration order is significant
/// because reconciliation keeps the first entry that matches a label.
#[rustfmt::skip]
pub const WORLD_FOODS: &[&str] = &[
    // Proteins
    "chicken", "beef", "pork", "lamb", "turkey", "duck", "goose", "rabbit", "venison", "salmon",
    "tuna", "cod", "halibut", "shrimp", "lobster", "crab", "octopus", "squid", "eggs", "tofu",
    "tempeh", "seitan", "quinoa protein",

    // Regional meats
    "wagyu beef", "kobe beef", "angus beef", "iberico ham", "prosciutto", "pancetta", "chorizo",
    "salami", "pepperoni", "bratwurst", "kielbasa", "mortadella",

    // Fish
    "sea bass", "grouper", "snapper", "mahi mahi", "swordfish", "mackerel", "sardines",
    "anchovies", "eel", "catfish", "trout", "pike", "carp", "tilapia", "barramundi",

    // Seafood
    "mussels", "clams", "oysters", "scallops", "sea urchin", "abalone", "conch", "crawfish",
    "langostino", "king crab", "snow crab", "dungeness crab",

    // Carbohydrates
    "rice", "basmati rice", "jasmine rice", "wild rice", "black rice", "red rice", "bread",
    "sourdough", "rye bread", "pumpernickel", "focaccia", "ciabatta", "pasta", "spaghetti",
    "penne", "fusilli", "linguine", "fettuccine", "ravioli", "gnocchi", "risotto", "polenta",
    "couscous", "bulgur", "farro", "barley",

    // Regional breads
    "naan", "pita", "tortilla", "chapati", "roti", "injera", "lavash", "bagel", "croissant",
    "baguette", "pretzel", "brioche", "challah", "sourdough starter",

    // Vegetables
    "tomato", "cherry tomato", "roma tomato", "heirloom tomato", "green tomato", "lettuce",
    "romaine", "iceberg", "arugula", "spinach", "kale", "chard", "cabbage", "red cabbage",
    "napa cabbage", "bok choy", "brussels sprouts", "broccoli", "cauliflower", "broccolini",
    "romanesco", "kohlrabi", "carrot", "baby carrot", "purple carrot", "parsnip", "turnip",
    "rutabaga", "potato", "sweet potato", "purple potato", "fingerling potato", "yukon gold",
    "onion", "red onion", "shallot", "scallion", "leek", "garlic", "ginger", "bell pepper",
    "jalapeño", "habanero", "ghost pepper", "poblano", "serrano", "cucumber", "zucchini",
    "yellow squash", "butternut squash", "acorn squash", "eggplant", "japanese eggplant",
    "chinese eggplant", "white eggplant",

    // Asian vegetables
    "daikon", "lotus root", "bamboo shoots", "water chestnuts", "snow peas", "sugar snap peas",
    "edamame", "mung bean sprouts", "shiitake mushroom", "enoki mushroom", "oyster mushroom",
    "king oyster mushroom", "maitake",

    // Fruit
    "apple", "red apple", "green apple", "gala apple", "honeycrisp", "granny smith", "banana",
    "plantain", "red banana", "baby banana", "orange", "blood orange", "navel orange",
    "valencia orange", "mandarin", "tangerine", "clementine", "lemon", "lime", "key lime",
    "grapefruit", "pomelo", "yuzu", "bergamot", "strawberry", "blueberry", "raspberry",
    "blackberry", "cranberry", "gooseberry", "grape", "red grape", "green grape", "wine grape",
    "raisin", "currant", "pear", "asian pear", "bosc pear", "anjou pear", "peach", "nectarine",
    "plum", "apricot", "cherry", "sweet cherry", "sour cherry", "date", "fig",

    // Tropical fruit
    "mango", "papaya", "pineapple", "coconut", "passion fruit", "dragon fruit", "rambutan",
    "lychee", "longan", "durian", "jackfruit", "breadfruit", "guava", "star fruit", "kiwi",
    "golden kiwi", "persimmon", "pomegranate", "avocado", "hass avocado", "fuerte avocado",
    "plantain", "breadfruit",

    // Dried fruit and nuts
    "almonds", "walnuts", "pecans", "pistachios", "cashews", "brazil nuts", "hazelnuts",
    "macadamia nuts", "pine nuts", "chestnuts", "peanuts", "sunflower seeds", "pumpkin seeds",
    "chia seeds", "flax seeds", "sesame seeds",

    // Legumes
    "black beans", "kidney beans", "pinto beans", "navy beans", "lima beans", "chickpeas",
    "lentils", "red lentils", "green lentils", "black lentils", "split peas", "black eyed peas",
    "mung beans", "adzuki beans", "fava beans",

    // Dairy
    "milk", "whole milk", "skim milk", "almond milk", "soy milk", "oat milk", "cheese",
    "cheddar", "mozzarella", "parmesan", "gouda", "brie", "camembert", "blue cheese", "feta",
    "ricotta", "cottage cheese", "cream cheese", "goat cheese", "yogurt", "greek yogurt",
    "kefir", "butter", "ghee", "cream", "sour cream",

    // Asian dishes
    "sushi", "sashimi", "maki roll", "nigiri", "temaki", "chirashi", "poke bowl", "ramen",
    "udon", "soba", "pho", "pad thai", "fried rice", "lo mein", "spring roll", "summer roll",
    "dumplings", "gyoza", "wontons", "bao buns", "dim sum", "har gow", "siu mai", "char siu",
    "peking duck", "kung pao chicken", "sweet and sour pork", "mapo tofu", "hot pot",
    "shabu shabu", "korean bbq", "bulgogi", "bibimbap", "kimchi", "japchae", "tteokbokki",
    "miso soup", "tempura", "teriyaki", "yakitori", "tonkatsu", "katsu curry", "okonomiyaki",
    "takoyaki", "onigiri", "bento box", "curry", "thai curry", "indian curry", "tikka masala",
    "butter chicken", "vindaloo", "korma", "biryani", "tandoori",

    // Italian dishes
    "pizza", "margherita pizza", "pepperoni pizza", "hawaiian pizza", "meat lovers",
    "carbonara", "bolognese", "pesto", "alfredo", "arrabbiata", "puttanesca", "cacio e pepe",
    "aglio e olio", "lasagna", "cannelloni", "manicotti", "risotto", "osso buco", "saltimbocca",
    "piccata", "parmigiana", "bruschetta", "caprese", "antipasto", "prosciutto e melone",
    "carpaccio", "tiramisu", "panna cotta", "gelato", "cannoli", "biscotti", "panettone",
    "focaccia",

    // French dishes
    "croissant", "pain au chocolat", "baguette", "quiche", "ratatouille", "bouillabaisse",
    "coq au vin", "beef bourguignon", "cassoulet", "confit", "foie gras", "escargot",
    "french onion soup", "crème brûlée", "soufflé", "macarons", "éclair", "profiterole",
    "mille-feuille", "tarte tatin",

    // Mexican dishes
    "tacos", "burritos", "quesadillas", "enchiladas", "tamales", "tostadas", "nachos",
    "guacamole", "salsa", "pico de gallo", "mole", "pozole", "chiles rellenos", "carnitas",
    "barbacoa", "al pastor", "carne asada", "elote", "churros", "flan", "tres leches",
    "horchata", "margarita",

    // Middle Eastern dishes
    "hummus", "falafel", "shawarma", "kebab", "tabouleh", "fattoush", "baba ganoush", "dolmas",
    "baklava", "halva", "tahini", "za'atar", "manakish", "kibbeh", "muhammara", "labneh",
    "ful medames", "shakshuka",

    // Indian dishes
    "dal", "samosa", "pakora", "naan", "chapati", "paratha", "dosa", "idli", "vada", "uttapam",
    "chutney", "raita", "lassi", "masala chai", "kulfi", "gulab jamun", "ras malai", "kheer",
    "halwa", "jalebi", "barfi",

    // African dishes
    "injera", "berbere", "doro wat", "fufu", "jollof rice", "tagine", "couscous", "harissa",
    "biltong", "bobotie", "bunny chow", "sosaties",

    // Brazilian dishes
    "feijoada", "açaí bowl", "pão de açúcar", "brigadeiro", "coxinha", "pastel", "tapioca",
    "farofa", "moqueca", "caipirinha", "guaraná",

    // Desserts
    "chocolate", "dark chocolate", "milk chocolate", "white chocolate", "cake", "birthday cake",
    "wedding cake", "cheesecake", "red velvet", "carrot cake", "chocolate cake", "vanilla cake",
    "pound cake", "bundt cake", "cupcake", "muffin", "brownie", "cookie",
    "chocolate chip cookie", "oatmeal cookie", "sugar cookie", "gingerbread", "macaroon",
    "macaron", "donut", "glazed donut", "jelly donut", "boston cream", "cruller", "pie",
    "apple pie", "pumpkin pie", "pecan pie", "cherry pie", "key lime pie", "tart", "fruit tart",
    "lemon tart", "chocolate tart", "custard tart", "ice cream", "vanilla ice cream",
    "chocolate ice cream", "strawberry", "sorbet", "gelato", "frozen yogurt", "popsicle",
    "sundae", "milkshake",

    // Beverages
    "coffee", "espresso", "cappuccino", "latte", "americano", "macchiato", "mocha",
    "frappuccino", "cold brew", "turkish coffee", "vietnamese coffee", "tea", "green tea",
    "black tea", "white tea", "oolong tea", "chai tea", "matcha", "earl grey", "jasmine tea",
    "chamomile", "peppermint tea", "juice", "orange juice", "apple juice", "cranberry juice",
    "grape juice", "smoothie", "protein shake", "kombucha", "kefir", "wine", "beer", "sake",

    // Condiments and spices
    "salt", "pepper", "garlic powder", "onion powder", "paprika", "cumin", "coriander",
    "turmeric", "ginger", "cinnamon", "nutmeg", "cloves", "cardamom", "star anise", "fennel",
    "oregano", "basil", "thyme", "rosemary", "sage", "parsley", "cilantro", "dill", "chives",
    "mint", "soy sauce", "fish sauce", "oyster sauce", "hoisin sauce", "sriracha", "tabasco",
    "worcestershire", "balsamic vinegar", "olive oil", "sesame oil",
];
