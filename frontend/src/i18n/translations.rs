#[derive(Debug, PartialEq)]
pub struct Translations {
    pub motto: &'static str,
    pub license: &'static str,
    pub nav: Nav,
    pub ecosystem: Ecosystem,
    pub hero: Hero,
    pub philosophy: Philosophy,
    pub services: Services,
    pub portfolio: PortfolioCopy,
    pub lightbox: LightboxCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
    pub notices: Notices,
}

#[derive(Debug, PartialEq)]
pub struct Nav {
    pub services: &'static str,
    pub portfolio: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Ecosystem {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Hero {
    pub since: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub kakao: &'static str,
    pub share: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Philosophy {
    pub title: &'static str,
    pub p1: &'static str,
    pub p2: &'static str,
    pub p3: &'static str,
    pub video_badge: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceCopy {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Services {
    pub eyebrow: &'static str,
    pub subtitle: &'static str,
    pub kitchen: ServiceCopy,
    pub bath: ServiceCopy,
    pub improvement: ServiceCopy,
}

#[derive(Debug, PartialEq)]
pub struct PortfolioCopy {
    pub eyebrow: &'static str,
    pub filter_all: &'static str,
    pub filter_kitchen: &'static str,
    pub filter_bath: &'static str,
    pub filter_improvement: &'static str,
    pub before_after: &'static str,
    pub photos: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct LightboxCopy {
    pub close: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub thumbnail: &'static str,
    pub staging_notice: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactCopy {
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub email_label: &'static str,
    pub area_label: &'static str,
    pub area: &'static str,
    pub open_chat: &'static str,
    pub form_title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FooterCopy {
    pub refresh: &'static str,
    pub privacy: &'static str,
    pub copyright: &'static str,
    pub hub: &'static str,
}

/// Texts shown in blocking alerts.
#[derive(Debug, PartialEq)]
pub struct Notices {
    pub submit_success: &'static str,
    pub submit_failed_prefix: &'static str,
    pub submit_failed_default: &'static str,
    pub submit_unreachable: &'static str,
    pub missing_required: &'static str,
    pub sdk_missing: &'static str,
    pub share_failed: &'static str,
}

impl Translations {
    /// Every string in the table, in declaration order.
    #[cfg(test)]
    pub fn all_strings(&self) -> Vec<&'static str> {
        let Translations {
            motto,
            license,
            nav,
            ecosystem,
            hero,
            philosophy,
            services,
            portfolio,
            lightbox,
            contact,
            footer,
            notices,
        } = self;
        let mut out = vec![*motto, *license];
        out.extend([nav.services, nav.portfolio, nav.about, nav.contact]);
        out.extend([ecosystem.title, ecosystem.subtitle]);
        out.extend([hero.since, hero.title, hero.subtitle, hero.cta, hero.kakao, hero.share]);
        out.extend([
            philosophy.title,
            philosophy.p1,
            philosophy.p2,
            philosophy.p3,
            philosophy.video_badge,
        ]);
        out.extend([services.eyebrow, services.subtitle]);
        for s in [&services.kitchen, &services.bath, &services.improvement] {
            out.extend([s.title, s.desc]);
        }
        out.extend([
            portfolio.eyebrow,
            portfolio.filter_all,
            portfolio.filter_kitchen,
            portfolio.filter_bath,
            portfolio.filter_improvement,
            portfolio.before_after,
            portfolio.photos,
        ]);
        out.extend([
            lightbox.close,
            lightbox.previous,
            lightbox.next,
            lightbox.thumbnail,
            lightbox.staging_notice,
        ]);
        out.extend([
            contact.eyebrow,
            contact.headline,
            contact.intro,
            contact.email_label,
            contact.area_label,
            contact.area,
            contact.open_chat,
            contact.form_title,
            contact.name,
            contact.email,
            contact.phone,
            contact.address,
            contact.message,
            contact.submit,
            contact.sending,
        ]);
        out.extend([footer.refresh, footer.privacy, footer.copyright, footer.hub]);
        out.extend([
            notices.submit_success,
            notices.submit_failed_prefix,
            notices.submit_failed_default,
            notices.submit_unreachable,
            notices.missing_required,
            notices.sdk_missing,
            notices.share_failed,
        ]);
        out
    }
}

pub static EN: Translations = Translations {
    motto: "God is Love, Great Living, Good Life",
    license: "Licensed & Insured | Virginia Class A Contractor (HIC, CBC, RBC)",
    nav: Nav {
        services: "Services",
        portfolio: "Portfolio",
        about: "Our Thoughts",
        contact: "Contact",
    },
    ecosystem: Ecosystem {
        title: "Expertise & Connectivity",
        subtitle: "Decades of craftsmanship\nmeeting modern living",
    },
    hero: Hero {
        since: "Since 2007",
        title: "Building Excellence with Sincerity",
        subtitle: "GL Design+Build crafts spaces that define the quality of your life.",
        cta: "Request Consultation",
        kakao: "KakaoTalk",
        share: "Share with Friends",
    },
    philosophy: Philosophy {
        title: "Our Thoughts",
        p1: "Don't postpone the joy you deserve today for the sake of future resale value. While you hesitate, that joy ends up being a gift for the next homeowner, not you. We work together to complete your [safe, organized, comfortable, and beautiful space]. Don't fill your precious home based solely on 'price comparisons'. The sincerity GL has built since 2007 and the priceless value of becoming your 'good neighbor'—even after delivering a safe and refined finish—is something that cannot be measured.",
        p2: "Unlike many sites that use stock photos or AI-generated images, we only showcase our own authentic work through real project photos.",
        p3: "Visit our Facebook and Flickr to see our extensive gallery of real project photos. We believe in the power of 'Before and After' photos to show the true quality of our direct craftsmanship. You can also view our history and videos on YouTube.",
        video_badge: "Process & Quality",
    },
    services: Services {
        eyebrow: "Expertise",
        subtitle: "We provide the most complex and rewarding remodeling services, orchestrated by decades of experience.",
        kitchen: ServiceCopy {
            title: "Kitchen Remodeling",
            desc: "The kitchen is the heart of the home, the hub for family. Beyond cabinetry, we specialize in complex systems: plumbing, electrical, and structural wall removals for open-concept layouts, backed by decades of expertise.",
        },
        bath: ServiceCopy {
            title: "Bath Remodeling",
            desc: "Transform your bathroom into a private sanctuary. Our expertise ensures a perfect balance of aesthetics and functionality.",
        },
        improvement: ServiceCopy {
            title: "Home Improvement",
            desc: "Meaningful upgrades within your budget—from flooring and deck transformations to essential repairs. Even for the smallest tasks, our expertise ensures your home's value is preserved. For quick local repairs, please click the clock link below.",
        },
    },
    portfolio: PortfolioCopy {
        eyebrow: "Masterpieces",
        filter_all: "All",
        filter_kitchen: "Kitchen",
        filter_bath: "Bath",
        filter_improvement: "Home Improvement",
        before_after: "B&A",
        photos: "Photos",
    },
    lightbox: LightboxCopy {
        close: "Close",
        previous: "Previous photo",
        next: "Next photo",
        thumbnail: "thumbnail",
        staging_notice: "AI-enhanced staging: Decorative items added to actual site photos.",
    },
    contact: ContactCopy {
        eyebrow: "Get In Touch",
        headline: "Let's build your\ndream together",
        intro: "Whether you're planning a complete overhaul or a subtle upgrade, we're here to provide professional guidance.",
        email_label: "Email Us",
        area_label: "Service Area",
        area: "Northern Virginia, USA",
        open_chat: "KakaoTalk OpenChat",
        form_title: "Request A Consultation",
        name: "Name",
        email: "Email",
        phone: "Phone",
        address: "Address",
        message: "Project Details",
        submit: "Send Request",
        sending: "Sending...",
    },
    footer: FooterCopy {
        refresh: "Get the latest features & updates",
        privacy: "Certified Private Analytics: 100% On-Device / No Cloud Sync.",
        copyright: "© 2026 All Rights Reserved.",
        hub: "aeZ Studio Hub",
    },
    notices: Notices {
        submit_success: "Your request has been sent! We will contact you soon.",
        submit_failed_prefix: "Failed: ",
        submit_failed_default: "Please try again later.",
        submit_unreachable: "Failed to connect. Please use KakaoTalk OpenChat.",
        missing_required: "Please enter your name, email and phone number.",
        sdk_missing: "Kakao SDK not loaded.",
        share_failed: "Error opening Kakao Share.",
    },
};

pub static KO: Translations = Translations {
    motto: "God is Love, Great Living, Good Life",
    license: "Commonwealth of Virginia Class A Contractor '최상위 건축면허(HIC, CBC, RBC)' & 보험 완비",
    nav: Nav {
        services: "서비스",
        portfolio: "포트폴리오",
        about: "우리의 생각",
        contact: "상담문의",
    },
    ecosystem: Ecosystem {
        title: "경험과 기술의 연결",
        subtitle: "수십 년의 시공 노하우와\n주거 편의 시스템의 만남",
    },
    hero: Hero {
        since: "Since 2007",
        title: "진심을 짓는\n프리미엄 건축",
        subtitle: "GL Design+Build는 당신의 삶의 가치를 높이는 공간을 설계합니다.",
        cta: "무료 상담 신청",
        kakao: "카카오톡 상담",
        share: "친구에게 공유",
    },
    philosophy: Philosophy {
        title: "우리의 생각",
        p1: "미래의 주택시장에서의 경쟁력은 물론이거니와, 지금 당신이 누려야 할 기쁨을 미루지 마세요. 고민하며 미루는 사이 그 기쁨은 당신이 아닌, 다음 집주인에게 돌아갑니다. 당신의 [안전하고 정돈된, 편안하고 아름다운 공간]을 위해 함께 완성해 갑니다. 단지 '가격 비교'만으로 당신의 소중한 공간을 채우려 하지 마세요. 2007년 부터 쌓여 온 GL의 진정성과 정돈되고 안전한 마감이후에도 '함께 하는 이웃'이 되는 것은, 그 어떤것으로도 가치를 매길 수 없습니다.",
        p2: "웹사이트에서 흔히 보는 잡지 사진이나 인터넷 생성 이미지가 아닙니다. GL은 오직 우리가 직접 땀 흘리며 시공한 실제 현장의 실제 사진으로 보여드립니다.",
        p3: "우리의 페이스북과 플리커에는 수많은 실제 공사진행 사진들이 담겨있습니다. 우리는 'Before and After' 사진이야말로 실력을 증명하는 진짜라고 믿습니다. 오랜 시간 쌓아온 GL의 역사를 현장 사진과 동영상으로 직접 확인해 보세요.",
        video_badge: "시공 과정과 품질",
    },
    services: Services {
        eyebrow: "전문 분야",
        subtitle: "우리는 수십 년간의 경험을 바탕으로 가장 복합적이고 가치 있는 리모델링 서비스를 제공합니다.",
        kitchen: ServiceCopy {
            title: "키친 리모델링",
            desc: "주방은 온 식구가 모이는 집의 심장입니다. 단순한 캐비닛 교체를 넘어, 오픈형 주방을 위한 벽 철거와 복잡한 구조 변경까지 수십 년의 노하우로 완벽하게 해결합니다.",
        },
        bath: ServiceCopy {
            title: "욕실 리모델링",
            desc: "가장 개인적이고 소중한 공간을 쉼이 있는 고품격 욕실로 변화시켜 드립니다.",
        },
        improvement: ServiceCopy {
            title: "집수리(업그레이드)",
            desc: "바닥재 교체, 데크 업그레이드 등 예산에 맞는 부분적 업그레이드만으로도 큰 만족감을 드릴 수 있습니다. 아주 작은 수리라도 망설이지 마세요. 목조 주택의 원리를 정확히 아는 전문가가 집의 가치를 지켜드립니다. 소소한 수리는 아래 시계가 그려진 링크를 눌러주세요.",
        },
    },
    portfolio: PortfolioCopy {
        eyebrow: "대표 작품",
        filter_all: "전체",
        filter_kitchen: "주방",
        filter_bath: "욕실",
        filter_improvement: "집수리",
        before_after: "전후 비교",
        photos: "장",
    },
    lightbox: LightboxCopy {
        close: "닫기",
        previous: "이전 사진",
        next: "다음 사진",
        thumbnail: "미리보기",
        staging_notice: "AI 스테이징: 실제 현장 사진에 장식 소품만 추가되었습니다.",
    },
    contact: ContactCopy {
        eyebrow: "연락하기",
        headline: "당신의 꿈을\n함께 짓겠습니다",
        intro: "전체 리모델링부터 작은 업그레이드까지, 전문가의 상담을 받아보세요.",
        email_label: "이메일 문의",
        area_label: "서비스 지역",
        area: "미국 북버지니아",
        open_chat: "카카오톡 오픈채팅",
        form_title: "상담 신청하기",
        name: "성함",
        email: "이메일",
        phone: "전화번호",
        address: "주소",
        message: "공사 내용 (예: 주방 리모델링 등)",
        submit: "문의하기",
        sending: "전송 중...",
    },
    footer: FooterCopy {
        refresh: "새로운 기능 및 환경 업데이트",
        privacy: "개인정보 보호 분석: 100% 기기 내 처리 / 클라우드 동기화 없음.",
        copyright: "© 2026 모든 권리 보유.",
        hub: "aeZ 스튜디오 허브",
    },
    notices: Notices {
        submit_success: "문의가 성공적으로 접수되었습니다. 곧 연락드리겠습니다!",
        submit_failed_prefix: "전송 실패: ",
        submit_failed_default: "다시 시도해 주세요.",
        submit_unreachable: "서버 연결에 실패했습니다. 카카오톡 상담을 이용해 주세요.",
        missing_required: "이름, 이메일, 전화번호를 입력해 주세요.",
        sdk_missing: "카카오 SDK를 불러오지 못했습니다.",
        share_failed: "공유하기를 실행하는 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.",
    },
};
