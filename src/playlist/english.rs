//! English playlist tables.

use super::Track;

pub const HAPPY: &[Track] = &[
    Track::new("Happy", "Pharrell Williams")
        .album("G I R L")
        .year(2013)
        .explanation(
            "This upbeat anthem with its infectious clapping rhythm and positive lyrics is scientifically proven to boost mood and make you smile.",
        ),
    Track::new("Don't Stop Me Now", "Queen")
        .album("Jazz")
        .year(1978)
        .explanation(
            "Freddie Mercury's soaring vocals and the energetic tempo create an unstoppable feeling of joy and freedom.",
        ),
    Track::new("Can't Stop the Feeling!", "Justin Timberlake")
        .album("Trolls OST")
        .year(2016)
        .explanation(
            "A feel-good pop song with groovy beats that naturally makes you want to dance and celebrate life.",
        ),
    Track::new("Good as Hell", "Lizzo")
        .album("Cuz I Love You")
        .year(2019)
        .explanation(
            "An empowering self-love anthem that radiates confidence and positive energy with every note.",
        ),
    Track::new("Walking on Sunshine", "Katrina & The Waves")
        .album("Walking on Sunshine")
        .year(1983)
        .explanation(
            "The ultimate feel-good classic with bright horns and cheerful lyrics that instantly lifts your spirits.",
        ),
    Track::new("Shake It Off", "Taylor Swift")
        .album("1989")
        .year(2014)
        .explanation(
            "A catchy, carefree anthem about letting go of negativity and embracing joy with infectious pop energy.",
        ),
    Track::new("September", "Earth, Wind & Fire")
        .album("The Best of Earth, Wind & Fire Vol. 1")
        .year(1978)
        .explanation(
            "Funky disco vibes and celebratory lyrics make this the perfect song for pure happiness and nostalgia.",
        ),
    Track::new("I Gotta Feeling", "Black Eyed Peas")
        .album("The E.N.D.")
        .year(2009)
        .explanation(
            "An electrifying party anthem that captures the excitement of good times and positive anticipation.",
        ),
    Track::new("Best Day of My Life", "American Authors")
        .album("Oh, What a Life")
        .year(2013)
        .explanation(
            "Uplifting indie-pop with hand-clapping beats and optimistic lyrics celebrating life's best moments.",
        ),
    Track::new("Three Little Birds", "Bob Marley & The Wailers")
        .album("Exodus")
        .year(1977)
        .explanation(
            "Reggae's most reassuring message that 'every little thing gonna be alright' delivered with soothing rhythms.",
        ),
];

pub const SAD: &[Track] = &[
    Track::new("Someone Like You", "Adele")
        .album("21")
        .year(2011)
        .explanation(
            "Adele's powerful vocals and raw emotion provide catharsis for heartbreak, helping you process feelings of loss.",
        ),
    Track::new("All I Want", "Kodaline")
        .album("In a Perfect World")
        .year(2013)
        .explanation(
            "A hauntingly beautiful ballad that captures the ache of longing with gentle piano and emotional vocals.",
        ),
    Track::new("Fix You", "Coldplay")
        .album("X&Y")
        .year(2005)
        .explanation(
            "Chris Martin's tender vocals offer comfort and hope during difficult times, building to an uplifting crescendo.",
        ),
    Track::new("The Night We Met", "Lord Huron")
        .album("Strange Trails")
        .year(2015)
        .explanation(
            "Nostalgic and melancholic, this song beautifully expresses the pain of lost love and wishing to turn back time.",
        ),
    Track::new("Hurt", "Johnny Cash")
        .album("American IV")
        .year(2002)
        .explanation(
            "Cash's weathered voice adds profound depth to this reflection on regret and pain, offering emotional release.",
        ),
    Track::new("Say Something", "A Great Big World, Christina Aguilera")
        .album("Is There Anybody Out There?")
        .year(2013)
        .explanation(
            "A heart-wrenching duet about giving up on a relationship, with minimalist piano that amplifies the emotion.",
        ),
    Track::new("Skinny Love", "Bon Iver")
        .album("For Emma, Forever Ago")
        .year(2007)
        .explanation(
            "Justin Vernon's falsetto and sparse instrumentation create an intimate space for processing heartache.",
        ),
    Track::new("Mad World", "Gary Jules")
        .album("Donnie Darko OST")
        .year(2001)
        .explanation(
            "A melancholic cover that captures feelings of isolation and sadness with haunting simplicity.",
        ),
    Track::new("Tears in Heaven", "Eric Clapton")
        .album("Unplugged")
        .year(1992)
        .explanation(
            "A deeply personal song about loss and grief that offers solace through its gentle acoustic melody.",
        ),
    Track::new("Nothing Compares 2 U", "Sinéad O'Connor")
        .album("I Do Not Want What I Haven't Got")
        .year(1990)
        .explanation(
            "O'Connor's vulnerable performance captures the devastating emptiness of missing someone deeply.",
        ),
];

pub const ANGRY: &[Track] = &[
    Track::new("In the End", "Linkin Park")
        .album("Hybrid Theory")
        .year(2000)
        .explanation(
            "Chester Bennington's raw vocals channel frustration into powerful catharsis with nu-metal intensity.",
        ),
    Track::new("Killing in the Name", "Rage Against the Machine")
        .album("Rage Against the Machine")
        .year(1992)
        .explanation(
            "Aggressive riffs and rebellious lyrics provide the perfect outlet for rage and defiance.",
        ),
    Track::new("Break Stuff", "Limp Bizkit")
        .album("Significant Other")
        .year(1999)
        .explanation(
            "An unapologetic anthem for when you're having a terrible day and need to vent your frustration.",
        ),
    Track::new("Chop Suey!", "System of a Down")
        .album("Toxicity")
        .year(2001)
        .explanation(
            "Chaotic energy and intense vocals mirror the turbulent emotions of anger and confusion.",
        ),
    Track::new("Bulls on Parade", "Rage Against the Machine")
        .album("Evil Empire")
        .year(1996)
        .explanation(
            "Heavy guitar riffs and politically charged lyrics fuel righteous anger and empowerment.",
        ),
    Track::new("You're Gonna Go Far, Kid", "The Offspring")
        .album("Rise and Fall, Rage and Grace")
        .year(2008)
        .explanation(
            "Fast-paced punk rock that channels anger into energetic defiance and determination.",
        ),
    Track::new("Bodies", "Drowning Pool")
        .album("Sinner")
        .year(2001)
        .explanation(
            "Aggressive nu-metal with pounding rhythms perfect for releasing pent-up frustration.",
        ),
    Track::new("Freak on a Leash", "Korn")
        .album("Follow the Leader")
        .year(1998)
        .explanation(
            "Jonathan Davis's unique vocals and heavy bass express inner turmoil and anger powerfully.",
        ),
    Track::new("Last Resort", "Papa Roach")
        .album("Infest")
        .year(2000)
        .explanation(
            "Raw emotion and heavy instrumentation provide an outlet for feelings of desperation and anger.",
        ),
    Track::new("Numb", "Linkin Park")
        .album("Meteora")
        .year(2003)
        .explanation(
            "Expresses frustration with expectations and pressure through intense electronic rock fusion.",
        ),
];

pub const CALM: &[Track] = &[
    Track::new("Weightless", "Marconi Union")
        .album("Weightless")
        .year(2011)
        .explanation(
            "Scientifically designed to reduce anxiety by 65%, with ambient sounds that slow your heart rate.",
        ),
    Track::new("Breathe Me", "Sia")
        .album("Colour the Small One")
        .year(2004)
        .explanation(
            "Delicate piano and Sia's vulnerable vocals create a safe space for introspection and calm.",
        ),
    Track::new("Holocene", "Bon Iver")
        .album("Bon Iver")
        .year(2011)
        .explanation(
            "Ethereal vocals and gentle instrumentation evoke peaceful natural landscapes and inner tranquility.",
        ),
    Track::new("To Build a Home", "The Cinematic Orchestra")
        .album("Ma Fleur")
        .year(2007)
        .explanation(
            "A beautiful piano-driven piece that creates a sense of comfort and emotional peace.",
        ),
    Track::new("Clair de Lune", "Claude Debussy")
        .album("Suite Bergamasque")
        .year(1905)
        .explanation(
            "This classical masterpiece's flowing melody has been soothing listeners for over a century.",
        ),
    Track::new("Sunset Lover", "Petit Biscuit")
        .album("Petit Biscuit")
        .year(2015)
        .explanation(
            "Dreamy electronic soundscapes create a peaceful, meditative atmosphere perfect for relaxation.",
        ),
    Track::new("Banana Pancakes", "Jack Johnson")
        .album("In Between Dreams")
        .year(2005)
        .explanation(
            "Laid-back acoustic vibes and gentle vocals create a cozy, stress-free atmosphere.",
        ),
    Track::new("The A Team", "Ed Sheeran")
        .album("+")
        .year(2011)
        .explanation(
            "Soft guitar and tender storytelling provide a gentle, contemplative listening experience.",
        ),
    Track::new("Skinny Love", "Birdy")
        .album("Birdy")
        .year(2011)
        .explanation(
            "Birdy's delicate piano cover creates a serene, emotionally soothing soundscape.",
        ),
    Track::new("River Flows in You", "Yiruma")
        .album("First Love")
        .year(2001)
        .explanation(
            "This beautiful piano composition flows like water, naturally inducing relaxation and peace.",
        ),
];

pub const ENERGETIC: &[Track] = &[
    Track::new("Eye of the Tiger", "Survivor")
        .album("Eye of the Tiger")
        .year(1982)
        .explanation(
            "The ultimate motivational anthem with driving guitars that fuel determination and fighting spirit.",
        ),
    Track::new("Thunderstruck", "AC/DC")
        .album("The Razors Edge")
        .year(1990)
        .explanation(
            "High-voltage rock energy with electrifying guitar riffs that pump adrenaline instantly.",
        ),
    Track::new("Lose Yourself", "Eminem")
        .album("8 Mile OST")
        .year(2002)
        .explanation(
            "Eminem's intense flow and motivational lyrics inspire you to seize every opportunity with full force.",
        ),
    Track::new("Till I Collapse", "Eminem")
        .album("The Eminem Show")
        .year(2002)
        .explanation(
            "A powerful workout anthem with relentless energy that pushes you beyond your limits.",
        ),
    Track::new("Stronger", "Kanye West")
        .album("Graduation")
        .year(2007)
        .explanation(
            "Daft Punk's sample combined with Kanye's confidence creates an unstoppable energy boost.",
        ),
    Track::new("Can't Hold Us", "Macklemore & Ryan Lewis")
        .album("The Heist")
        .year(2011)
        .explanation(
            "Explosive energy and rapid-fire lyrics create an unstoppable momentum perfect for action.",
        ),
    Track::new("Remember the Name", "Fort Minor")
        .album("The Rising Tied")
        .year(2005)
        .explanation(
            "Mike Shinoda's powerful verses about dedication and hustle fuel competitive energy.",
        ),
    Track::new("Centuries", "Fall Out Boy")
        .album("American Beauty/American Psycho")
        .year(2014)
        .explanation(
            "Epic rock anthem with stadium-sized energy that makes you feel invincible and legendary.",
        ),
    Track::new("Run Boy Run", "Woodkid")
        .album("The Golden Age")
        .year(2013)
        .explanation(
            "Orchestral percussion and urgent vocals create cinematic energy perfect for pushing forward.",
        ),
    Track::new("POWER", "Kanye West")
        .album("My Beautiful Dark Twisted Fantasy")
        .year(2010)
        .explanation(
            "Bold production and confident lyrics deliver pure power and unstoppable energy.",
        ),
];

pub const ROMANTIC: &[Track] = &[
    Track::new("Perfect", "Ed Sheeran")
        .album("÷ (Divide)")
        .year(2017)
        .explanation(
            "A modern classic that captures the beauty of finding your soulmate with heartfelt sincerity.",
        ),
    Track::new("Thinking Out Loud", "Ed Sheeran")
        .album("x (Multiply)")
        .year(2014)
        .explanation(
            "Soulful vocals and sweet lyrics about enduring love make this perfect for romantic moments.",
        ),
    Track::new("All of Me", "John Legend")
        .album("Love in the Future")
        .year(2013)
        .explanation(
            "John Legend's passionate piano ballad celebrates unconditional love and acceptance beautifully.",
        ),
    Track::new("Make You Feel My Love", "Adele")
        .album("19")
        .year(2008)
        .explanation(
            "Adele's powerful rendition of Dylan's classic expresses deep devotion and unwavering commitment.",
        ),
    Track::new("A Thousand Years", "Christina Perri")
        .album("The Twilight Saga")
        .year(2011)
        .explanation(
            "Delicate piano and heartfelt lyrics capture the timeless nature of true love perfectly.",
        ),
    Track::new("At Last", "Etta James")
        .album("At Last!")
        .year(1960)
        .explanation(
            "Etta's soulful voice and lush orchestration create the ultimate romantic atmosphere.",
        ),
    Track::new("Can't Help Falling in Love", "Elvis Presley")
        .album("Blue Hawaii")
        .year(1961)
        .explanation(
            "Elvis's tender delivery of this timeless ballad captures the inevitability of falling in love.",
        ),
    Track::new("Your Song", "Elton John")
        .album("Elton John")
        .year(1970)
        .explanation(
            "Simple, honest lyrics and beautiful melody express pure, genuine romantic affection.",
        ),
    Track::new("Unchained Melody", "The Righteous Brothers")
        .album("Just Once in My Life")
        .year(1965)
        .explanation(
            "Soaring vocals and emotional depth make this one of the most romantic songs ever recorded.",
        ),
    Track::new("Everything", "Michael Bublé")
        .album("Call Me Irresponsible")
        .year(2007)
        .explanation(
            "Bublé's smooth vocals and charming lyrics celebrate finding everything you need in one person.",
        ),
];
