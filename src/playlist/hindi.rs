//! Hindi (Bollywood) playlist tables.

use super::Track;

pub const HAPPY: &[Track] = &[
    Track::new("Badtameez Dil", "Benny Dayal, Shefali Alvares")
        .album("Yeh Jawaani Hai Deewani")
        .year(2013)
        .explanation(
            "एक मस्त और जोशीला गाना जो आपको नाचने पर मजबूर कर देगा, युवा ऊर्जा से भरपूर।",
        ),
    Track::new("Gallan Goodiyaan", "Yashita Sharma, Manish Kumar Tipu")
        .album("Dil Dhadakne Do")
        .year(2015)
        .explanation(
            "पंजाबी धुनों के साथ यह शादी का गाना खुशी और उत्सव का सही माहौल बनाता है।",
        ),
    Track::new("Balam Pichkari", "Vishal Dadlani, Shalmali Kholgade")
        .album("Yeh Jawaani Hai Deewani")
        .year(2013)
        .explanation(
            "होली की मस्ती और रंगों का जश्न, इस गाने की ऊर्जा संक्रामक है।",
        ),
    Track::new("Dil Dhadakne Do", "Priyanka Chopra, Farhan Akhtar")
        .album("Zindagi Na Milegi Dobara")
        .year(2011)
        .explanation(
            "जिंदगी जीने का जोश भरने वाला गाना, दोस्ती और खुशी का जश्न मनाता है।",
        ),
    Track::new("Kar Gayi Chull", "Neha Kakkar, Badshah")
        .album("Kapoor & Sons")
        .year(2016)
        .explanation(
            "पार्टी एंथम जो तुरंत डांस फ्लोर पर उतरने का मन कर देता है।",
        ),
    Track::new("Aankh Marey", "Neha Kakkar, Mika Singh, Kumar Sanu")
        .album("Simmba")
        .year(2018)
        .explanation(
            "90s के हिट का रीमेक, पुरानी यादों के साथ नई ऊर्जा लाता है।",
        ),
    Track::new("Kala Chashma", "Amar Arshi, Badshah, Neha Kakkar")
        .album("Baar Baar Dekho")
        .year(2016)
        .explanation(
            "कैची बीट और मजेदार lyrics के साथ पूरी पार्टी को झूमा देने वाला गाना।",
        ),
    Track::new("Nachde Ne Saare", "Jasleen Royal, Siddharth Mahadevan")
        .album("Baar Baar Dekho")
        .year(2016)
        .explanation(
            "पंजाबी-पॉप फ्यूजन जो सबको एक साथ नचाने की ताकत रखता है।",
        ),
    Track::new("Radha", "Shreya Ghoshal, Udit Narayan")
        .album("Student of the Year")
        .year(2012)
        .explanation(
            "रंगीन और जोशीला गाना जो खुशी की लहर ला देता है।",
        ),
    Track::new("Ghagra", "Vishal Dadlani, Rekha Bhardwaj")
        .album("Yeh Jawaani Hai Deewani")
        .year(2013)
        .explanation(
            "राजस्थानी लोक संगीत के साथ बॉलीवुड का शानदार मिश्रण।",
        ),
];

pub const SAD: &[Track] = &[
    Track::new("Tum Hi Ho", "Arijit Singh")
        .album("Aashiqui 2")
        .year(2013)
        .explanation(
            "अरिजीत की भावुक आवाज़ दिल टूटने के दर्द को सही तरीके से व्यक्त करती है।",
        ),
    Track::new("Channa Mereya", "Arijit Singh")
        .album("Ae Dil Hai Mushkil")
        .year(2016)
        .explanation(
            "एकतरफा प्यार की पीड़ा को बयान करता यह गाना दिल को छू जाता है।",
        ),
    Track::new("Agar Tum Saath Ho", "Alka Yagnik, Arijit Singh")
        .album("Tamasha")
        .year(2015)
        .explanation(
            "रिश्तों की जटिलता और अलगाव के दर्द को खूबसूरती से दर्शाता है।",
        ),
    Track::new("Kabira", "Tochi Raina, Rekha Bhardwaj")
        .album("Yeh Jawaani Hai Deewani")
        .year(2013)
        .explanation(
            "सूफी प्रभाव के साथ यह गाना आत्मा को शांति देता है।",
        ),
    Track::new("Ae Dil Hai Mushkil", "Arijit Singh")
        .album("Ae Dil Hai Mushkil")
        .year(2016)
        .explanation(
            "प्यार में मिलने वाली तकलीफों को बेहद खूबसूरती से पेश करता है।",
        ),
    Track::new("Hamari Adhuri Kahani", "Arijit Singh")
        .album("Hamari Adhuri Kahani")
        .year(2015)
        .explanation(
            "अधूरे प्यार की कहानी, अरिजीत की आवाज़ में जादू भर देती है।",
        ),
    Track::new("Tujhe Bhula Diya", "Mohit Chauhan, Shekhar Ravjiani")
        .album("Anjaana Anjaani")
        .year(2010)
        .explanation(
            "किसी को भूलने की कोशिश में छुपा दर्द, बेहद भावुक।",
        ),
    Track::new("Phir Mohabbat", "Arijit Singh, Saim Bhat")
        .album("Murder 2")
        .year(2011)
        .explanation(
            "दोबारा प्यार में पड़ने के डर को दर्शाता मार्मिक गाना।",
        ),
    Track::new("Muskurane", "Arijit Singh")
        .album("Citylights")
        .year(2014)
        .explanation(
            "सादगी और भावना से भरा गाना जो दिल को छू लेता है।",
        ),
    Track::new("Pachtaoge", "Arijit Singh")
        .album("Single")
        .year(2019)
        .explanation(
            "खोने के बाद पछतावे की भावना को बखूबी व्यक्त करता है।",
        ),
];

pub const ANGRY: &[Track] = &[
    Track::new("Apna Time Aayega", "Ranveer Singh, DIVINE")
        .album("Gully Boy")
        .year(2019)
        .explanation(
            "अंडरडॉग का जोश और संघर्ष, हिप-हॉप की शक्ति से भरपूर।",
        ),
    Track::new("Khoon Chala", "Mohit Chauhan, Shruti Pathak")
        .album("Rang De Basanti")
        .year(2006)
        .explanation(
            "क्रांति और बदलाव की आग, देशभक्ति से भरा शक्तिशाली गाना।",
        ),
    Track::new("Malhari", "Vishal Dadlani")
        .album("Bajirao Mastani")
        .year(2015)
        .explanation(
            "युद्ध का जोश और वीरता, ढोल की थाप पर आधारित ताकतवर गाना।",
        ),
    Track::new("Tattad Tattad", "Aditya Narayan")
        .album("Goliyon Ki Raasleela Ram-Leela")
        .year(2013)
        .explanation(
            "गुजराती लोक संगीत के साथ रौद्र रस का शानदार मिश्रण।",
        ),
    Track::new("Sultan", "Sukhwinder Singh")
        .album("Sultan")
        .year(2016)
        .explanation(
            "लड़ाई का जज्बा और जीतने की भूख, सुखविंदर की ताकतवर आवाज़।",
        ),
    Track::new("Mere Desh Ki Dharti", "Mahendra Kapoor")
        .album("Upkar")
        .year(1967)
        .explanation(
            "देशभक्ति का जोश जगाने वाला क्लासिक गाना।",
        ),
    Track::new("Jai Jai Shivshankar", "Vishal Dadlani, Benny Dayal")
        .album("War")
        .year(2019)
        .explanation(
            "एक्शन और एनर्जी से भरपूर, हाई-ऑक्टेन ट्रैक।",
        ),
    Track::new("Khalibali", "Shivam Pathak")
        .album("Padmaavat")
        .year(2018)
        .explanation(
            "रणवीर सिंह के खिलजी किरदार का जोश, आक्रामक ऊर्जा।",
        ),
    Track::new("Azadi", "DIVINE, Dub Sharma")
        .album("Gully Boy")
        .year(2019)
        .explanation(
            "आजादी और विद्रोह का नारा, रैप की शक्ति।",
        ),
    Track::new("Dangal", "Daler Mehndi")
        .album("Dangal")
        .year(2016)
        .explanation(
            "संघर्ष और जीत का जश्न, दलेर की ऊर्जावान आवाज़।",
        ),
];

pub const CALM: &[Track] = &[
    Track::new("Tum Se Hi", "Mohit Chauhan")
        .album("Jab We Met")
        .year(2007)
        .explanation(
            "मोहित चौहान की मधुर आवाज़ दिल को सुकून देती है।",
        ),
    Track::new("Muskurane", "Arijit Singh")
        .album("Citylights")
        .year(2014)
        .explanation(
            "सरल और भावुक, मन को शांति प्रदान करने वाला गाना।",
        ),
    Track::new("Phir Le Aya Dil", "Arijit Singh, Mohd. Irfan")
        .album("Barfi!")
        .year(2012)
        .explanation(
            "नॉस्टैल्जिक और शांत, पुरानी यादों में खो जाने का एहसास।",
        ),
    Track::new("Ilahi", "Arijit Singh")
        .album("Yeh Jawaani Hai Deewani")
        .year(2013)
        .explanation(
            "आध्यात्मिक शांति और आत्म-खोज का सफर, सुकून भरा।",
        ),
    Track::new("Shayad", "Arijit Singh")
        .album("Love Aaj Kal")
        .year(2020)
        .explanation(
            "कोमल और भावुक, रिश्तों की अनिश्चितता को दर्शाता है।",
        ),
    Track::new("Iktara", "Kavita Seth, Amitabh Bhattacharya")
        .album("Wake Up Sid")
        .year(2009)
        .explanation(
            "सूफी प्रभाव के साथ शांत और मधुर, मन को ठहराव देता है।",
        ),
    Track::new("Pee Loon", "Mohit Chauhan")
        .album("Once Upon A Time In Mumbai")
        .year(2010)
        .explanation(
            "रोमांटिक और शांत, प्यार की मधुरता को व्यक्त करता है।",
        ),
    Track::new("Tum Ho", "Mohit Chauhan")
        .album("Rockstar")
        .year(2011)
        .explanation(
            "सादगी और गहराई से भरा, आत्मा को छूने वाला गाना।",
        ),
    Track::new("Khuda Jaane", "KK, Shilpa Rao")
        .album("Bachna Ae Haseeno")
        .year(2008)
        .explanation(
            "प्यार की अनिश्चितता को कोमलता से बयान करता है।",
        ),
    Track::new("Teri Ore", "Rahat Fateh Ali Khan, Shreya Ghoshal")
        .album("Singh Is Kinng")
        .year(2008)
        .explanation(
            "राहत की सूफी आवाज़ दिल को सुकून और प्यार से भर देती है।",
        ),
];

pub const ENERGETIC: &[Track] = &[
    Track::new("Zinda", "Siddharth Mahadevan")
        .album("Bhaag Milkha Bhaag")
        .year(2013)
        .explanation(
            "मिल्खा सिंह की जीवटता, दौड़ने और जीतने का जोश।",
        ),
    Track::new("Ainvayi Ainvayi", "Salim Merchant")
        .album("Band Baaja Baaraat")
        .year(2010)
        .explanation(
            "शादी का जोश और उत्साह, नाचने को मजबूर करने वाला।",
        ),
    Track::new("Senorita", "Farhan Akhtar, Hrithik Roshan, Abhay Deol")
        .album("Zindagi Na Milegi Dobara")
        .year(2011)
        .explanation(
            "स्पेनिश फ्लेवर के साथ दोस्ती और जिंदगी का जश्न।",
        ),
    Track::new("Ghungroo", "Arijit Singh, Shilpa Rao")
        .album("War")
        .year(2019)
        .explanation(
            "हाई एनर्जी डांस ट्रैक, हृतिक के मूव्स के साथ परफेक्ट।",
        ),
    Track::new("Tune Maari Entriyaan", "Vishal Dadlani, Neeti Mohan, Bappi Lahiri")
        .album("Gunday")
        .year(2014)
        .explanation(
            "रेट्रो और मॉडर्न का मिश्रण, पार्टी के लिए बेस्ट।",
        ),
    Track::new("Chak De India", "Sukhwinder Singh")
        .album("Chak De! India")
        .year(2007)
        .explanation(
            "देशभक्ति और टीम स्पिरिट, जीतने का जोश भर देता है।",
        ),
    Track::new("Dhoom Machale", "Sunidhi Chauhan")
        .album("Dhoom")
        .year(2004)
        .explanation(
            "एड्रेनालाइन रश और स्पीड का एहसास, एक्शन पैक्ड।",
        ),
    Track::new("Jumme Ki Raat", "Mika Singh, Palak Muchhal")
        .album("Kick")
        .year(2014)
        .explanation(
            "वीकेंड पार्टी का परफेक्ट गाना, डांस फ्लोर पर धमाल।",
        ),
    Track::new("Desi Girl", "Vishal Dadlani, Sunidhi Chauhan")
        .album("Dostana")
        .year(2008)
        .explanation(
            "देसी स्वैग और एनर्जी, प्रियंका के साथ आइकॉनिक।",
        ),
    Track::new("Tattoo", "Abhi Dutt")
        .album("RRKPK")
        .year(2022)
        .explanation(
            "हाई एनर्जी पंजाबी बीट, युवा जोश से भरपूर।",
        ),
];

pub const ROMANTIC: &[Track] = &[
    Track::new("Tum Jo Aaye", "Rahat Fateh Ali Khan, Tulsi Kumar")
        .album("Once Upon A Time In Mumbai")
        .year(2010)
        .explanation(
            "राहत की सूफी आवाज़ प्यार की गहराई को बयान करती है।",
        ),
    Track::new("Pehla Nasha", "Udit Narayan, Sadhana Sargam")
        .album("Jo Jeeta Wohi Sikandar")
        .year(1992)
        .explanation(
            "पहले प्यार की मासूमियत और खुशी, सदाबहार रोमांटिक गाना।",
        ),
    Track::new("Tujhe Kitna Chahne Lage", "Arijit Singh")
        .album("Kabir Singh")
        .year(2019)
        .explanation(
            "गहरे प्यार की अभिव्यक्ति, अरिजीत की भावुक आवाज़।",
        ),
    Track::new("Raabta", "Arijit Singh")
        .album("Agent Vinod")
        .year(2012)
        .explanation(
            "आत्माओं के बीच का रिश्ता, सूफी रोमांस का बेहतरीन उदाहरण।",
        ),
    Track::new("Tera Ban Jaunga", "Akhil Sachdeva, Tulsi Kumar")
        .album("Kabir Singh")
        .year(2019)
        .explanation(
            "समर्पण और प्यार की गहराई, दिल को छू लेने वाला।",
        ),
    Track::new("Tum Mile", "Neeraj Shridhar, Pritam")
        .album("Tum Mile")
        .year(2009)
        .explanation(
            "बारिश और रोमांस का परफेक्ट कॉम्बिनेशन।",
        ),
    Track::new("Jeene Laga Hoon", "Atif Aslam, Shreya Ghoshal")
        .album("Ramaiya Vastavaiya")
        .year(2013)
        .explanation(
            "प्यार में जीने का एहसास, आतिफ की मखमली आवाज़।",
        ),
    Track::new("Bolna", "Arijit Singh, Asees Kaur")
        .album("Kapoor & Sons")
        .year(2016)
        .explanation(
            "कोमल और भावुक, प्यार की बातें करने का गाना।",
        ),
    Track::new("Hawayein", "Arijit Singh")
        .album("Jab Harry Met Sejal")
        .year(2017)
        .explanation(
            "प्यार की हवाओं में बहने का एहसास, मधुर और रोमांटिक।",
        ),
    Track::new("Tere Bina", "A.R. Rahman, Chinmayi")
        .album("Guru")
        .year(2007)
        .explanation(
            "रहमान का जादू, प्यार के बिना अधूरेपन को दर्शाता है।",
        ),
];
